//! ルーティング
//!
//! URLパス → 画面（一覧 / 記事詳細）の対応と、戻る操作用の履歴スタック。
//!
//! - `{base}/` → 一覧
//! - `{base}/article/{slug}` → 詳細

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::article::{Article, ArticleStore};

/// アプリのマウント先パス
pub const BASE_PATH: &str = "/blog";

const DETAIL_SEGMENT: &str = "article";

/// パスセグメント内でエスケープする文字
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// 画面ルート
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    List,
    Detail { slug: String },
}

static ROOT: Route = Route::List;

impl Route {
    pub fn detail(slug: impl Into<String>) -> Self {
        Route::Detail { slug: slug.into() }
    }

    /// パスからルートを決定
    ///
    /// 認識できない形のパスは一覧にフォールバックする。
    pub fn from_path(path: &str, base: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = strip_base(path, base);
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::List,
            [DETAIL_SEGMENT, slug] => Route::detail(percent_decode_str(slug).decode_utf8_lossy()),
            _ => {
                tracing::debug!(path, "unrecognized path, showing list");
                Route::List
            }
        }
    }

    /// ルートからパスを生成
    pub fn to_path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Route::List => format!("{}/", base),
            Route::Detail { slug } => {
                format!("{}/{}/{}", base, DETAIL_SEGMENT, utf8_percent_encode(slug, SEGMENT))
            }
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Route::List => None,
            Route::Detail { slug } => Some(slug),
        }
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// 戻る操作のための履歴スタック
///
/// 先頭エントリは常に残る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::List)
    }
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self { entries: vec![initial] }
    }

    pub fn current(&self) -> &Route {
        self.entries.last().unwrap_or(&ROOT)
    }

    /// 新しいエントリを積む（現在と同じルートなら何もしない）
    pub fn push(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        self.entries.push(route);
        true
    }

    /// 直前のエントリへ戻る
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn replace(&mut self, route: Route) {
        match self.entries.last_mut() {
            Some(last) => *last = route,
            None => self.entries.push(route),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

/// ルートを解決した画面
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    List,
    Detail(&'a Article),
    /// 該当スラッグの記事なし
    NotFound(&'a str),
}

pub fn resolve<'a>(store: &'a ArticleStore, route: &'a Route) -> View<'a> {
    match route {
        Route::List => View::List,
        Route::Detail { slug } => match store.find_by_slug(slug) {
            Some(article) => View::Detail(article),
            None => View::NotFound(slug),
        },
    }
}
