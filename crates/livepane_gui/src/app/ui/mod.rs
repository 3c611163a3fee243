//! UI panel modules extracted from the main app update loop.

/// Read-only view of the latest rendered document.
pub(super) mod document_panel;
/// Active-buffer editor.
pub(super) mod editor_panel;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Heading, tab buttons, and preview links.
pub(super) mod top_bar;
