use aiblog::{browse, cli, config, data, error, logging, render};
use aiblog_common::{Accent, FileStore, ListState, PreferenceStore, Theme, PALETTE};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{AiBlogError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { query, category, source, reading_time, sort, page, page_size } => {
            let store = data::load_store(&config.resolve_data_path(cli.data.as_deref()))?;

            let mut state = ListState::with_page_size(page_size.unwrap_or(config.page_size));
            state.set_search_query(query.unwrap_or_default());
            state.set_category(category);
            state.set_source(source);
            state.set_reading_time(reading_time);
            state.set_sort_order(sort);

            let total = state.display_set(&store).len();
            for _ in 1..page.max(1) {
                if !state.load_more(total) {
                    break;
                }
            }

            println!("{}", render::format_outcome(&state.outcome(&store), state.criteria()));
        }

        Commands::Show { slug, raw } => {
            let store = data::load_store(&config.resolve_data_path(cli.data.as_deref()))?;
            match store.find_by_slug(&slug) {
                Some(article) => println!("{}", render::format_article(article, raw)),
                None => println!("{}", render::format_not_found(&slug)),
            }
        }

        Commands::Facets => {
            let store = data::load_store(&config.resolve_data_path(cli.data.as_deref()))?;
            println!("{}", render::format_facets(&store.facets()));
        }

        Commands::Validate => {
            let path = config.resolve_data_path(cli.data.as_deref());
            println!("🔍 {}", path.display());
            let store = data::load_store(&path)?;
            data::validate_store(&store)?;
        }

        Commands::Browse => {
            let store = data::load_store(&config.resolve_data_path(cli.data.as_deref()))?;
            let mut prefs = PreferenceStore::load(FileStore::open(Config::preferences_path()?));
            browse::run_browser(&store, config.page_size, &mut prefs)?;
        }

        Commands::Config { show, set_data, page_size, theme, accent } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_data {
                println!("✔ Data path: {}", path.display());
                config.data_path = Some(path);
                changed = true;
            }

            if let Some(size) = page_size {
                config.set_page_size(size)?;
                println!("✔ Page size: {}", size);
                changed = true;
            }

            if changed {
                config.save()?;
            }

            let mut prefs = PreferenceStore::load(FileStore::open(Config::preferences_path()?));

            if let Some(raw) = theme {
                let theme = Theme::parse(&raw)
                    .ok_or_else(|| AiBlogError::InvalidArgument(format!("theme '{}' (use light or dark)", raw)))?;
                prefs.set_theme(theme);
                println!("✔ Theme: {}", theme.label());
            }

            if let Some(raw) = accent {
                let accent = parse_accent_arg(&raw)?;
                println!("✔ Accent: {}", accent);
                prefs.set_accent(accent);
            }

            if show {
                println!("Settings:");
                println!(
                    "  Data: {}",
                    config.resolve_data_path(cli.data.as_deref()).display()
                );
                println!("  Page size: {}", config.page_size);
                println!("{}", render::format_preferences(prefs.preferences()));
                println!("  Preferences file: {}", prefs.storage().path().display());
            }
        }
    }

    Ok(())
}

/// パレット名（大文字小文字無視）または16進カラー
fn parse_accent_arg(raw: &str) -> Result<Accent> {
    PALETTE
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(raw.trim()))
        .and_then(|c| Accent::parse(c.value))
        .or_else(|| Accent::parse(raw))
        .ok_or_else(|| {
            let names: Vec<&str> = PALETTE.iter().map(|c| c.name).collect();
            AiBlogError::InvalidArgument(format!("accent '{}' (use #rrggbb or one of: {})", raw, names.join(", ")))
        })
}
