mod app;
mod io;
mod model;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data_arg = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let app = DesktopApp::new(data_arg);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "AI Library",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}
