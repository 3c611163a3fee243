//! HTTP request handlers.

/// Host editor page.
pub mod page;
/// Standalone preview document and live revision socket.
pub mod preview;
/// Session inspection, tab switching, and buffer edits.
pub mod session;
