//! Desktop editor entry point.
//!
//! Exposes a `run` helper so the workspace root can launch the native UI
//! without duplicating initialization logic.

mod app;

use app::LivePaneApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn suppress_vulkan_loader_debug() {
    if std::env::var("LIVEPANE_KEEP_VK_DEBUG").is_ok() {
        return;
    }
    std::env::remove_var("VK_LOADER_DEBUG");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("livepane_server=info,livepane_gui=info"));

    // A second init (e.g. a test harness already installed one) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the desktop editor with tracing enabled.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the preview server cannot bind.
pub fn run() -> eframe::Result<()> {
    suppress_vulkan_loader_debug();
    init_tracing();

    let app = LivePaneApp::new().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("LivePane"),
        ..Default::default()
    };

    eframe::run_native("LivePane", options, Box::new(|_cc| Ok(Box::new(app))))
}
