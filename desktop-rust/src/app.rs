use std::path::{Path, PathBuf};

use anyhow::Result;
use eframe::egui::{self, Color32, RichText};

use aiblog_common::{
    format_long_date, reading_progress, resolve, to_blocks, Accent, Article, Block, DisplayOutcome, FileStore,
    ListState, PreferenceStore, Route, ScrollChrome, SortOrder, Theme, View, PALETTE,
};

use crate::io::{load_config, load_store, preferences_path, resolve_data_path};
use crate::model::ViewerState;

const APP_TITLE: &str = "AI Library";
const READING_WIDTH: f32 = 760.0;

pub struct DesktopApp {
    state: ViewerState,
    prefs: PreferenceStore<FileStore>,
    status: String,
    settings_open: bool,
    chrome: ScrollChrome,
    progress: f32,
    scroll_reset: bool,
    titled_slug: Option<String>,
}

enum Nav {
    Open(String),
    Back,
}

/// 現在のルートが指す画面
enum Screen {
    List,
    Detail(Article),
    NotFound(String),
}

impl DesktopApp {
    pub fn new(data_arg: Option<PathBuf>) -> Self {
        let config = load_config();
        let prefs_path = preferences_path().unwrap_or_else(|| PathBuf::from("preferences.json"));

        let mut app = Self {
            state: ViewerState {
                page_size: config.page_size.max(1),
                ..ViewerState::default()
            },
            prefs: PreferenceStore::load(FileStore::open(prefs_path)),
            status: String::new(),
            settings_open: false,
            chrome: ScrollChrome::default(),
            progress: 0.0,
            scroll_reset: false,
            titled_slug: None,
        };

        let path = resolve_data_path(data_arg, &config);
        match app.load_from_path(&path) {
            Ok(_) => app.status = format!("Loaded {}", path.display()),
            Err(err) => {
                tracing::warn!("{err:#}");
                app.status = format!("Load failed: {err}");
            }
        }
        app
    }

    fn open_json(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match self.load_from_path(&path) {
                Ok(_) => self.status = format!("Loaded {}", path.display()),
                Err(err) => self.status = format!("Load failed: {err}"),
            }
        }
    }

    fn reload_json(&mut self) {
        let Some(path) = self.state.source_path.clone() else {
            self.status = "No source file loaded".to_string();
            return;
        };
        match self.load_from_path(&path) {
            Ok(_) => self.status = format!("Reloaded {}", path.display()),
            Err(err) => self.status = format!("Reload failed: {err}"),
        }
    }

    fn load_from_path(&mut self, path: &Path) -> Result<()> {
        let store = load_store(path)?;
        let issues = store.validate();
        if !issues.is_empty() {
            tracing::warn!(count = issues.len(), "dataset has issues");
        }
        self.state.replace_store(store, path.to_path_buf());
        self.scroll_reset = true;
        Ok(())
    }

    fn apply_preferences(&self, ctx: &egui::Context) {
        let prefs = self.prefs.preferences();
        let mut visuals = match prefs.theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        let accent = accent_color(&prefs.accent);
        visuals.selection.bg_fill = accent;
        visuals.hyperlink_color = accent;
        ctx.set_visuals(visuals);
    }

    fn apply_nav(&mut self, nav: Nav) {
        match nav {
            Nav::Open(slug) => {
                self.state.navigate(Route::detail(slug));
            }
            Nav::Back => {
                if !self.state.back() {
                    self.state.navigate(Route::List);
                }
            }
        }
        self.scroll_reset = true;
        self.progress = 0.0;
    }

    fn render_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.settings_open;
        egui::Window::new("Customization")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new("THEME MODE").small().weak());
                ui.horizontal(|ui| {
                    let theme = self.prefs.theme();
                    if ui.selectable_label(theme == Theme::Light, "☀ Light").clicked() {
                        self.prefs.set_theme(Theme::Light);
                    }
                    if ui.selectable_label(theme == Theme::Dark, "☾ Dark").clicked() {
                        self.prefs.set_theme(Theme::Dark);
                    }
                });

                ui.add_space(12.0);
                ui.label(RichText::new("ACCENT COLOR").small().weak());
                ui.horizontal_wrapped(|ui| {
                    for color in PALETTE {
                        let Some(accent) = Accent::parse(color.value) else {
                            continue;
                        };
                        let selected = self.prefs.accent() == &accent;
                        let button = egui::Button::new(
                            RichText::new(if selected { "●" } else { " " }).color(Color32::WHITE),
                        )
                        .fill(accent_color(&accent))
                        .min_size(egui::vec2(32.0, 32.0))
                        .rounding(16.0);
                        if ui.add(button).on_hover_text(color.name).clicked() {
                            self.prefs.set_accent(accent);
                        }
                    }
                });
            });
        self.settings_open = open;
    }

    fn render_list(&mut self, ui: &mut egui::Ui) -> Option<Nav> {
        let mut nav = None;
        let store = &self.state.store;
        let facets = &self.state.facets;
        let page_size = self.state.page_size;
        let list = self
            .state
            .list
            .get_or_insert_with(|| ListState::with_page_size(page_size));
        let fallback = accent_color(self.prefs.accent());

        let mut scroll = egui::ScrollArea::vertical()
            .id_source("article_list")
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_reset) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let output = scroll.show(ui, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                let mut query = list.criteria().search_query.clone();
                let edit = egui::TextEdit::singleline(&mut query)
                    .hint_text("Search the AI Library")
                    .desired_width(480.0);
                if ui.add(edit).changed() {
                    list.set_search_query(query);
                }
            });
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                let mut sort = list.criteria().sort_order;
                egui::ComboBox::from_label("Date")
                    .selected_text(sort.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut sort, SortOrder::Newest, SortOrder::Newest.label());
                        ui.selectable_value(&mut sort, SortOrder::Oldest, SortOrder::Oldest.label());
                    });
                list.set_sort_order(sort);

                let picked = facet_combo(ui, "Topic", "All", &facets.categories, list.criteria().category.as_deref());
                if let Some(value) = picked {
                    list.set_category(value);
                }
                let picked = facet_combo(ui, "Source", "All", &facets.sources, list.criteria().source.as_deref());
                if let Some(value) = picked {
                    list.set_source(value);
                }
                let picked = facet_combo(
                    ui,
                    "Reading",
                    "Any Time",
                    &facets.reading_times,
                    list.criteria().reading_time.as_deref(),
                );
                if let Some(value) = picked {
                    list.set_reading_time(value);
                }

                ui.label(RichText::new(format!("{} articles", store.len())).weak());
            });

            if list.criteria().has_active_filters() {
                let criteria = list.criteria().clone();
                ui.horizontal_wrapped(|ui| {
                    if let Some(category) = &criteria.category {
                        if ui.button(format!("{category} ×")).clicked() {
                            list.set_category(None);
                        }
                    }
                    if let Some(source) = &criteria.source {
                        if ui.button(format!("{source} ×")).clicked() {
                            list.set_source(None);
                        }
                    }
                    if let Some(time) = &criteria.reading_time {
                        if ui.button(format!("{time} ×")).clicked() {
                            list.set_reading_time(None);
                        }
                    }
                    if ui.button("Clear all ×").clicked() {
                        list.clear_filters();
                    }
                });
            }

            ui.separator();

            match list.outcome(store) {
                DisplayOutcome::Empty => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label("No articles match your filters.");
                        if ui.button("Clear all filters").clicked() {
                            list.clear_filters();
                        }
                    });
                }
                DisplayOutcome::Items { visible, total, has_more } => {
                    for article in &visible {
                        if article_card(ui, article, fallback).clicked() {
                            nav = Some(Nav::Open(article.slug.clone()));
                        }
                        ui.add_space(8.0);
                    }
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(format!("Showing {} of {}", visible.len(), total)).weak());
                        if has_more && ui.button("Load more").clicked() {
                            list.load_more(total);
                        }
                    });
                    ui.add_space(24.0);
                }
            }
        });

        self.chrome = ScrollChrome::from_scroll(output.state.offset.y as f64);
        nav
    }

    fn render_detail(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, article: &Article) -> Option<Nav> {
        let mut nav = None;

        if self.titled_slug.as_deref() != Some(article.slug.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(article.title.clone()));
            self.titled_slug = Some(article.slug.clone());
            self.scroll_reset = true;
        }

        let accent = accent_color(self.prefs.accent());
        let (bar, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 4.0), egui::Sense::hover());
        ui.painter().rect_filled(bar, 0.0, ui.visuals().faint_bg_color);
        let mut fill = bar;
        fill.set_width(bar.width() * self.progress);
        ui.painter().rect_filled(fill, 0.0, accent);

        let mut scroll = egui::ScrollArea::vertical()
            .id_source(("article", article.slug.as_str()))
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_reset) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let output = scroll.show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(READING_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.add_space(12.0);
                    if ui.link("← BACK").clicked() {
                        nav = Some(Nav::Back);
                    }
                    ui.add_space(24.0);
                    ui.label(RichText::new(article.category.to_uppercase()).strong().color(accent));
                    ui.label(RichText::new(&article.title).size(28.0).strong());
                    ui.label(
                        RichText::new(format!(
                            "{} · {} · {}",
                            format_long_date(&article.date),
                            article.source,
                            article.reading_time
                        ))
                        .weak(),
                    );
                    if let Some(image) = &article.image {
                        ui.hyperlink_to("Cover image", image);
                    }
                    ui.add_space(16.0);
                    render_blocks(ui, &to_blocks(&article.content));
                    if !article.original_link.is_empty() {
                        ui.add_space(24.0);
                        ui.hyperlink_to(
                            format!("Read the original on {} →", article.source),
                            &article.original_link,
                        );
                    }
                    ui.add_space(48.0);
                });
            });
        });

        self.progress = reading_progress(
            output.state.offset.y as f64,
            output.content_size.y as f64,
            output.inner_rect.height() as f64,
        ) as f32;
        nav
    }
}

fn accent_color(accent: &Accent) -> Color32 {
    let (r, g, b) = accent.rgb();
    Color32::from_rgb(r, g, b)
}

/// 候補から1つ選ぶコンボボックス（変更時のみSome）
fn facet_combo(
    ui: &mut egui::Ui,
    label: &str,
    any_label: &str,
    values: &[String],
    current: Option<&str>,
) -> Option<Option<String>> {
    let mut picked = None;
    egui::ComboBox::from_label(label)
        .selected_text(current.unwrap_or(any_label))
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), any_label).clicked() {
                picked = Some(None);
            }
            for value in values {
                if ui.selectable_label(current == Some(value.as_str()), value.as_str()).clicked() {
                    picked = Some(Some(value.clone()));
                }
            }
        });
    picked.filter(|p: &Option<String>| p.as_deref() != current)
}

fn article_card(ui: &mut egui::Ui, article: &Article, fallback: Color32) -> egui::Response {
    let accent = Accent::parse(article.accent_or(""))
        .map(|a| accent_color(&a))
        .unwrap_or(fallback);
    let frame = egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0));

    let inner = frame.show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            let (strip, _) = ui.allocate_exact_size(egui::vec2(6.0, 56.0), egui::Sense::hover());
            ui.painter().rect_filled(strip, 3.0, accent);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(format!("{} • {}", format_long_date(&article.date), article.category))
                        .small()
                        .weak(),
                );
                ui.label(RichText::new(&article.title).strong().size(16.0));
                ui.label(
                    RichText::new(format!("{} · {}", article.source, article.reading_time))
                        .small()
                        .weak(),
                );
            });
        });
    });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn render_blocks(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                ui.add_space(12.0);
                let size = match *level {
                    1 => 24.0,
                    2 => 20.0,
                    _ => 17.0,
                };
                ui.label(RichText::new(text.as_str()).size(size).strong());
                ui.add_space(4.0);
            }
            Block::Paragraph(text) => {
                ui.label(text.as_str());
                ui.add_space(6.0);
            }
            Block::ListItem(text) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    ui.label(text.as_str());
                });
            }
            Block::Quote(text) => {
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: 12.0,
                        ..Default::default()
                    })
                    .show(ui, |ui| {
                        ui.label(RichText::new(text.as_str()).italics().weak());
                    });
            }
            Block::Code(code) => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(code.as_str()).monospace());
                });
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_preferences(ctx);
        let mut nav = None;
        let on_list = *self.state.history.current() == Route::List;

        if on_list && self.titled_slug.take().is_some() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(APP_TITLE.to_string()));
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open JSON").clicked() {
                        self.open_json();
                        ui.close_menu();
                    }
                    if ui.button("Reload JSON").clicked() {
                        self.reload_json();
                        ui.close_menu();
                    }
                });
                if ui.button("⚙ Settings").clicked() {
                    self.settings_open = !self.settings_open;
                }
                if self.state.history.can_go_back() && ui.button("← Back").clicked() {
                    nav = Some(Nav::Back);
                }

                // スクロール後はヘッダーにコンパクト検索を出す
                if on_list && self.chrome.compact_header {
                    ui.separator();
                    let list = self.state.list_mut();
                    let mut query = list.criteria().search_query.clone();
                    let edit = egui::TextEdit::singleline(&mut query)
                        .hint_text("Search AI insights...")
                        .desired_width(240.0);
                    if ui.add(edit).changed() {
                        list.set_search_query(query);
                    }
                }

                ui.separator();
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(150)));
                }
            });
        });

        self.render_settings(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = self.state.history.current().clone();
            let screen = match resolve(&self.state.store, &route) {
                View::List => Screen::List,
                View::Detail(article) => Screen::Detail(article.clone()),
                View::NotFound(slug) => Screen::NotFound(slug.to_string()),
            };

            let page_nav = match screen {
                Screen::List => self.render_list(ui),
                Screen::Detail(article) => self.render_detail(ui, ctx, &article),
                Screen::NotFound(slug) => {
                    let mut back = None;
                    ui.vertical_centered(|ui| {
                        ui.add_space(80.0);
                        ui.heading("Post not found.");
                        ui.label(RichText::new(slug).weak());
                        if ui.button("← Back to list").clicked() {
                            back = Some(Nav::Back);
                        }
                    });
                    back
                }
            };
            if page_nav.is_some() {
                nav = page_nav;
            }
        });

        if on_list && self.chrome.show_scroll_top {
            egui::Area::new(egui::Id::new("scroll_top"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
                .show(ctx, |ui| {
                    if ui.button(RichText::new("↑ Top").size(16.0)).clicked() {
                        self.scroll_reset = true;
                    }
                });
        }

        if let Some(nav) = nav {
            self.apply_nav(nav);
            ctx.request_repaint();
        }
    }
}
