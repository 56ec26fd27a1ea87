//! AI Library CLI
//!
//! 事前生成された記事データを端末から検索・絞り込み・閲覧する。

pub mod browse;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod render;
