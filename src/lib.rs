//! Root crate facade for the LivePane editor, session core, and preview server.

pub use livepane_core::{
    defaults, render_document, Buffers, EditorSession, PreviewSurface, RenderPolicy,
    SandboxPolicy, Tab,
};
pub use livepane_server::{
    config, create_app, error, handlers, serve_router, AppError, AppState, Config,
    EmbeddedServer, PreviewFrame, WatchSurface,
};
