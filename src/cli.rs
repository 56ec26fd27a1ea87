use aiblog_common::SortOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aiblog")]
#[command(about = "AI Library - search, filter and read pre-generated articles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 記事データ(JSON)のパス
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 記事一覧を検索・絞り込みして表示
    List {
        /// タイトル・本文の検索語
        #[arg(short, long)]
        query: Option<String>,

        /// カテゴリ（完全一致）
        #[arg(short, long)]
        category: Option<String>,

        /// ソース（完全一致）
        #[arg(short, long)]
        source: Option<String>,

        /// 読了時間（完全一致、例: "3 min"）
        #[arg(short = 't', long)]
        reading_time: Option<String>,

        /// ソート順 (newest/oldest)
        #[arg(long, default_value = "newest")]
        sort: SortOrder,

        /// 表示するページ数（「もっと見る」の回数 + 1）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 1ページあたりの件数（省略時は設定値）
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// スラッグを指定して記事を表示
    Show {
        /// 記事のスラッグ
        #[arg(required = true)]
        slug: String,

        /// Markdownをそのまま出力
        #[arg(long)]
        raw: bool,
    },

    /// フィルタ候補（カテゴリ・ソース・読了時間）を表示
    Facets,

    /// データセットの整合性を検査
    Validate,

    /// 対話的に一覧・記事を閲覧
    Browse,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の記事データパスを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 1ページあたりの件数を設定
        #[arg(long)]
        page_size: Option<usize>,

        /// テーマ (light/dark)
        #[arg(long)]
        theme: Option<String>,

        /// アクセント色（パレット名または #rrggbb）
        #[arg(long)]
        accent: Option<String>,
    },
}
