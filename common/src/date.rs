//! 日付パース・表示
//!
//! データファイルの `date` は生成元によって書式が揺れるため、
//! よく使われる形式を順に試す。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// 日付文字列をパース
///
/// RFC 3339 はUTCに正規化する。日付のみの場合は0時とする。
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// "January 5, 2024" 形式で表示（パース不能ならそのまま）
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date("2024-06-01").expect("パース失敗");
        assert_eq!(dt.to_string(), "2024-06-01 00:00:00");
    }

    #[test]
    fn test_parse_generator_format() {
        let dt = parse_date("2026-01-05 09:30:15").expect("パース失敗");
        assert_eq!(dt.to_string(), "2026-01-05 09:30:15");
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert!(parse_date("2026-01-05 09:30:15.123456").is_some());
    }

    #[test]
    fn test_parse_rfc3339_normalized_to_utc() {
        let dt = parse_date("2024-03-10T12:00:00+09:00").expect("パース失敗");
        assert_eq!(dt.to_string(), "2024-03-10 03:00:00");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date("").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2024-13-40").is_none());
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_long_date("2026-11-20 08:00:00"), "November 20, 2026");
        assert_eq!(format_long_date("someday"), "someday");
    }
}
