//! Core domain library for LivePane (buffers, tabs, rendering, session state).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across LivePane crates.
pub mod constants;
/// Default buffer content shown on startup.
pub mod defaults;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types.
pub mod error;
/// Pure document rendering.
pub mod render;
/// Preview isolation policy.
pub mod sandbox;
/// Editor session: buffers, active tab, and presentation.
pub mod session;
/// Tab selector and per-tab metadata.
pub mod tab;

pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use error::AppError;
pub use render::render_document;
pub use sandbox::SandboxPolicy;
pub use session::{Buffers, EditorSession, PreviewSurface, RenderPolicy};
pub use tab::Tab;
