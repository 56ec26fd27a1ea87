//! 記事データモジュール
//!
//! 事前生成された記事データ（posts.json）の型と読み取り専用ストア。
//! ストアは起動時に一度だけ構築され、以後変更されない。

use crate::date::parse_date;
use crate::error::Result;
use crate::filter::Facets;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// 記事レコード
///
/// `image` / `color` は古いスキーマに存在しないことがあるため省略可能。
/// 空文字列も未設定として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, alias = "readingTime")]
    pub reading_time: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, alias = "originalLink")]
    pub original_link: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Article {
    /// 記事のアクセント色（未設定なら fallback）
    pub fn accent_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(fallback)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(i64),
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}

fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// データセット検査で見つかった問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    DuplicateSlug { slug: String },
    DuplicateId { id: String },
    UnsafeSlug { slug: String },
    InvalidDate { slug: String, date: String },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::DuplicateSlug { slug } => write!(f, "duplicate slug: {}", slug),
            DatasetIssue::DuplicateId { id } => write!(f, "duplicate id: {}", id),
            DatasetIssue::UnsafeSlug { slug } => write!(f, "slug is not URL-safe: {:?}", slug),
            DatasetIssue::InvalidDate { slug, date } => {
                write!(f, "unparseable date {:?} on article {}", date, slug)
            }
        }
    }
}

/// 読み取り専用の記事ストア
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    pub fn from_articles(articles: Vec<Article>) -> Self {
        tracing::debug!(count = articles.len(), "article store loaded");
        Self { articles }
    }

    /// JSON配列文字列から構築
    pub fn from_json_str(json: &str) -> Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Ok(Self::from_articles(articles))
    }

    /// JSONファイルから構築
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// スラッグで記事を検索
    pub fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// フィルタ候補（常にストア全体から算出）
    pub fn facets(&self) -> Facets {
        Facets::from_articles(&self.articles)
    }

    /// データセットの整合性を検査
    ///
    /// 読み込み自体は拒否しない。問題の一覧を返すだけ。
    pub fn validate(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();

        for article in &self.articles {
            if !slugs.insert(article.slug.as_str()) {
                issues.push(DatasetIssue::DuplicateSlug { slug: article.slug.clone() });
            }
            if !ids.insert(article.id.as_str()) {
                issues.push(DatasetIssue::DuplicateId { id: article.id.clone() });
            }
            if !is_url_safe(&article.slug) {
                issues.push(DatasetIssue::UnsafeSlug { slug: article.slug.clone() });
            }
            if parse_date(&article.date).is_none() {
                issues.push(DatasetIssue::InvalidDate {
                    slug: article.slug.clone(),
                    date: article.date.clone(),
                });
            }
        }

        issues
    }
}

/// RFC 3986 の非予約文字のみで構成されているか
fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, slug: &str, date: &str) -> Article {
        Article {
            id: id.to_string(),
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            content: String::new(),
            date: date.to_string(),
            category: "AI".to_string(),
            source: "techcrunch.com".to_string(),
            reading_time: "3 min".to_string(),
            image: None,
            original_link: String::new(),
            color: None,
        }
    }

    #[test]
    fn test_article_deserialize_generator_schema() {
        let json = r###"{
            "id": "1",
            "title": "OpenAI ships a new model",
            "slug": "openai-ships-a-new-model",
            "content": "## Intro\n\nBody",
            "date": "2026-01-05 09:30:00",
            "original_link": "https://techcrunch.com/2026/01/05/x",
            "image": "https://example.com/a.jpg",
            "category": "AI",
            "style": "Deep Dive",
            "format": "Long Form",
            "color": "#a855f7",
            "source": "techcrunch.com",
            "reading_time": "4 min"
        }"###;

        let a: Article = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(a.slug, "openai-ships-a-new-model");
        assert_eq!(a.reading_time, "4 min");
        assert_eq!(a.original_link, "https://techcrunch.com/2026/01/05/x");
        assert_eq!(a.color.as_deref(), Some("#a855f7"));
        assert!(a.has_image());
    }

    #[test]
    fn test_article_deserialize_older_schema_without_color() {
        let json = r#"{
            "id": 7,
            "title": "Robots",
            "slug": "robots",
            "content": "",
            "date": "2024-06-01",
            "originalLink": "https://www.wired.com/robots",
            "image": null,
            "category": "Robotics",
            "source": "wired.com",
            "readingTime": "2 min"
        }"#;

        let a: Article = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(a.id, "7");
        assert_eq!(a.reading_time, "2 min");
        assert_eq!(a.original_link, "https://www.wired.com/robots");
        assert!(a.image.is_none());
        assert!(a.color.is_none());
        assert_eq!(a.accent_or("#4285f4"), "#4285f4");
    }

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let json = r#"{"id":"1","slug":"s","title":"t","image":"  ","color":""}"#;
        let a: Article = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(a.image.is_none());
        assert!(a.color.is_none());
    }

    #[test]
    fn test_store_from_json_rejects_non_array() {
        let result = ArticleStore::from_json_str(r#"{"id":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_by_slug() {
        let store = ArticleStore::from_articles(vec![
            article("1", "a", "2024-01-01"),
            article("2", "b", "2024-06-01"),
        ]);
        assert_eq!(store.find_by_slug("b").map(|a| a.id.as_str()), Some("2"));
        assert!(store.find_by_slug("missing").is_none());
    }

    #[test]
    fn test_validate_clean_dataset() {
        let store = ArticleStore::from_articles(vec![
            article("1", "a", "2024-01-01"),
            article("2", "b", "2024-06-01 10:00:00"),
        ]);
        assert!(store.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_problems() {
        let store = ArticleStore::from_articles(vec![
            article("1", "same", "2024-01-01"),
            article("1", "same", "not a date"),
            article("3", "what's new?", "2024-01-02"),
        ]);
        let issues = store.validate();

        assert!(issues.contains(&DatasetIssue::DuplicateSlug { slug: "same".into() }));
        assert!(issues.contains(&DatasetIssue::DuplicateId { id: "1".into() }));
        assert!(issues.contains(&DatasetIssue::UnsafeSlug { slug: "what's new?".into() }));
        assert!(issues.contains(&DatasetIssue::InvalidDate {
            slug: "same".into(),
            date: "not a date".into(),
        }));
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn test_issue_display() {
        let issue = DatasetIssue::DuplicateSlug { slug: "a".into() };
        assert_eq!(issue.to_string(), "duplicate slug: a");
    }
}
