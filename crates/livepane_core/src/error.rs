//! Application error types for the session and its hosts.
use thiserror::Error;

/// Top-level application error type.
///
/// Buffer edits and tab switches are total, so none of these variants can be
/// produced by editing; they cover host-side input parsing and plumbing.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown tab '{0}' (expected html, css, or js)")]
    UnknownTab(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Editor session is unavailable")]
    SessionUnavailable,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Internal server error")]
    Internal,
}
