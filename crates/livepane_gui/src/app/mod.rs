//! Native egui editor bound to the shared editor session.

mod state_ops;
mod style;
mod ui;

use eframe::egui;
use livepane_core::config::env_flag_enabled;
use livepane_core::{AppError, Config, Tab};
use livepane_server::{AppState, EmbeddedServer};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Desktop editor shell.
///
/// The session behind [`AppState`] is the single source of truth; the app
/// keeps a mirror of the active buffer because egui edits a `&mut String`,
/// and commits that mirror back on every change.
pub(crate) struct LivePaneApp {
    state: AppState,
    _server: EmbeddedServer,
    preview_url: String,
    server_used_fallback: bool,
    active_tab: Tab,
    editor_text: String,
    revision: u64,
    document: String,
    document_panel_open: bool,
    status: Option<StatusMessage>,
    style_applied: bool,
}

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(5);
/// Browser-originated edits only show up on repaint.
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(500);
#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1200.0, 760.0];
#[doc = "Minimum enforced window size to keep editor and document panels usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [820.0, 520.0];
const EDITOR_ID: &str = "livepane_editor_input";

impl LivePaneApp {
    /// Construct the app from the environment config and start the embedded
    /// preview server.
    ///
    /// # Errors
    /// Returns an error if the preview server cannot be started.
    pub(crate) fn new() -> Result<Self, AppError> {
        let config = Config::from_env();
        let allow_public = env_flag_enabled("ALLOW_PUBLIC_ACCESS");
        if allow_public {
            warn!("Public access enabled - server will accept requests from any origin");
        }
        Self::with_state(AppState::new(config), allow_public)
    }

    fn with_state(state: AppState, allow_public: bool) -> Result<Self, AppError> {
        let server = EmbeddedServer::start(state.clone(), allow_public)?;
        let preview_url = server.base_url();
        let server_used_fallback = server.used_fallback();
        info!("desktop editor attached to preview at {}", preview_url);

        let mut app = Self {
            state,
            _server: server,
            preview_url,
            server_used_fallback,
            active_tab: Tab::default(),
            editor_text: String::new(),
            revision: 0,
            document: String::new(),
            document_panel_open: true,
            status: None,
            style_applied: false,
        };
        app.sync_from_session(Instant::now());
        Ok(app)
    }
}

impl eframe::App for LivePaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);

        let now = Instant::now();
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }

        let next_flush = self.sync_from_session(now);

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        if self.document_panel_open {
            self.render_document_panel(ctx);
        }
        self.render_editor_panel(ctx);

        let repaint_in = next_flush
            .map(|remaining| remaining.min(IDLE_REPAINT_INTERVAL))
            .unwrap_or(IDLE_REPAINT_INTERVAL);
        ctx.request_repaint_after(repaint_in);
    }
}

#[cfg(test)]
mod tests;
