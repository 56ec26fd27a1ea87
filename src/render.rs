//! 端末向けの表示整形

use aiblog_common::{
    format_long_date, to_blocks, Article, Block, DisplayOutcome, Facets, FilterCriteria, Preferences, Route,
    BASE_PATH,
};

/// 一覧カード（3行）
pub fn format_card(index: usize, article: &Article) -> String {
    format!(
        "{:>3}. {} • {}\n     {}\n     {} · {} · {}",
        index,
        format_long_date(&article.date),
        article.category,
        article.title,
        article.source,
        article.reading_time,
        Route::detail(article.slug.as_str()).to_path(BASE_PATH),
    )
}

/// 有効なフィルタのタグ表示
pub fn format_active_filters(criteria: &FilterCriteria) -> Option<String> {
    if !criteria.has_active_filters() {
        return None;
    }
    let mut tags = Vec::new();
    if !criteria.search_query.trim().is_empty() {
        tags.push(format!("\"{}\"", criteria.search_query.trim()));
    }
    tags.extend(criteria.category.iter().map(|c| format!("topic: {}", c)));
    tags.extend(criteria.source.iter().map(|s| format!("source: {}", s)));
    tags.extend(criteria.reading_time.iter().map(|t| format!("reading: {}", t)));
    Some(format!("Filters: {}", tags.join(", ")))
}

/// 一覧の表示結果
pub fn format_outcome(outcome: &DisplayOutcome<'_>, criteria: &FilterCriteria) -> String {
    let mut out = Vec::new();
    if let Some(filters) = format_active_filters(criteria) {
        out.push(filters);
    }

    match outcome {
        DisplayOutcome::Empty => {
            out.push("No articles match your filters.".to_string());
        }
        DisplayOutcome::Items { visible, total, has_more } => {
            out.push(format!(
                "Showing {} of {} · Date: {}",
                visible.len(),
                total,
                criteria.sort_order.label()
            ));
            out.push(String::new());
            for (i, article) in visible.iter().enumerate() {
                out.push(format_card(i + 1, article));
            }
            if *has_more {
                out.push(String::new());
                out.push(format!("… {} more", total - visible.len()));
            }
        }
    }

    out.join("\n")
}

/// Markdownブロックを端末用テキストに
pub fn format_blocks(blocks: &[Block]) -> String {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let rule = if *level <= 1 { '=' } else { '-' };
                out.push(text.clone());
                out.push(rule.to_string().repeat(text.chars().count()));
            }
            Block::Paragraph(text) => out.push(text.clone()),
            Block::ListItem(text) => out.push(format!("  • {}", text)),
            Block::Quote(text) => out.extend(text.lines().map(|l| format!("  │ {}", l))),
            Block::Code(code) => out.extend(code.lines().map(|l| format!("    {}", l))),
            Block::Rule => out.push("────────".to_string()),
        }
    }
    out.join("\n")
}

/// 記事詳細
pub fn format_article(article: &Article, raw: bool) -> String {
    let body = if raw {
        article.content.clone()
    } else {
        format_blocks(&to_blocks(&article.content))
    };

    let mut out = vec![
        article.category.to_uppercase(),
        article.title.clone(),
        format!(
            "{} · {} · {}",
            format_long_date(&article.date),
            article.source,
            article.reading_time
        ),
    ];
    if let Some(image) = &article.image {
        out.push(format!("Image: {}", image));
    }
    out.push(String::new());
    out.push(body);
    if !article.original_link.is_empty() {
        out.push(String::new());
        out.push(format!("Original: {}", article.original_link));
    }
    out.join("\n")
}

pub fn format_not_found(slug: &str) -> String {
    format!("Post not found: {}", slug)
}

pub fn format_facets(facets: &Facets) -> String {
    let section = |label: &str, values: &[String]| {
        if values.is_empty() {
            format!("{}: (none)", label)
        } else {
            format!("{}:\n{}", label, values.iter().map(|v| format!("  - {}", v)).collect::<Vec<_>>().join("\n"))
        }
    };
    [
        section("Topics", &facets.categories),
        section("Sources", &facets.sources),
        section("Reading time", &facets.reading_times),
    ]
    .join("\n")
}

pub fn format_preferences(prefs: &Preferences) -> String {
    let accent_name = prefs.accent.name().unwrap_or("custom");
    format!(
        "  Theme: {}\n  Accent: {} ({})",
        prefs.theme.label(),
        prefs.accent,
        accent_name
    )
}
