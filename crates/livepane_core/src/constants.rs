//! Shared constants used across LivePane crates.

/// Default HTTP port for the preview server.
pub const DEFAULT_PORT: u16 = 38517;

/// Default maximum request body accepted by the HTTP layer.
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 10 * 1024 * 1024;

/// Default render debounce in milliseconds (`0` renders on every edit).
pub const DEFAULT_RENDER_DEBOUNCE_MS: u64 = 0;

/// Title of the rendered preview document.
pub const PREVIEW_DOCUMENT_TITLE: &str = "Code Output";

/// Prefix of the error notice appended when the script buffer throws.
pub const SCRIPT_ERROR_PREFIX: &str = "JavaScript Error: ";
