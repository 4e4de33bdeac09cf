mod app;

use anyhow::{Result, anyhow};
use app::UiApp;
use cleaner_core::CleanerConfig;
use eframe::{NativeOptions, egui};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = CleanerConfig::default();
    tracing::info!(
        "quick-access base: {}",
        config.quick_access_base.display()
    );

    let title = format!("Dataset Cleaner {}", env!("CLEANER_VERSION"));
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(UiApp::new(config)))),
    )
    .map_err(|e| anyhow!("application stopped with error: {e}"))
}
