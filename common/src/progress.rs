//! 読了プログレス

/// スクロール位置から読了率 [0, 1] を算出
///
/// スクロール可能距離が0以下（短い記事）や非有限値の場合は0。
pub fn reading_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scroll_y.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_midway() {
        assert_eq!(reading_progress(500.0, 2000.0, 1000.0), 0.5);
    }

    #[test]
    fn test_progress_zero_denominator() {
        let p = reading_progress(0.0, 800.0, 800.0);
        assert_eq!(p, 0.0);
        assert!(!p.is_nan());
    }

    #[test]
    fn test_progress_negative_denominator() {
        assert_eq!(reading_progress(10.0, 400.0, 900.0), 0.0);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(reading_progress(-30.0, 2000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(1500.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_non_finite() {
        assert_eq!(reading_progress(f64::NAN, 2000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(10.0, f64::INFINITY, 1000.0), 0.0);
    }
}
