//! UIコンポーネント

pub mod article_card;
pub mod detail_page;
pub mod filter_bar;
pub mod header;
pub mod list_page;
pub mod progress_bar;
pub mod settings_panel;
pub mod splash;
