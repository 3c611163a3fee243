//! HTTP server wiring for LivePane (editor page, session API, sandboxed preview).

/// Embedded server helper for GUI integration.
pub mod embedded;
/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for the editor page, session API, and preview.
pub mod handlers;
/// Watch-channel preview surface.
pub mod surface;

pub use embedded::EmbeddedServer;
pub use livepane_core::{
    config, AppError, Buffers, Config, EditorSession, RenderPolicy, SandboxPolicy, Tab,
    DEFAULT_PORT,
};
pub use surface::{PreviewFrame, WatchSurface};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, put},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// The editor session bound to the watch surface.
pub type Session = EditorSession<WatchSurface>;

const HOST_CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self'; connect-src 'self'; frame-src 'self'; frame-ancestors 'none'; base-uri 'self'; form-action 'self'";

const MIN_TICKER_PERIOD: Duration = Duration::from_millis(10);

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub config: Arc<Config>,
    pub sandbox: SandboxPolicy,
    frames: watch::Receiver<PreviewFrame>,
}

impl AppState {
    /// Construct shared state with default buffers.
    ///
    /// The initial document is rendered and published before this returns.
    pub fn new(config: Config) -> Self {
        Self::with_buffers(config, Buffers::default())
    }

    /// Construct shared state starting from `buffers`.
    pub fn with_buffers(config: Config, buffers: Buffers) -> Self {
        let (surface, frames) = WatchSurface::channel();
        let session = EditorSession::with_buffers(buffers, surface, config.render_policy());
        Self {
            session: Arc::new(Mutex::new(session)),
            config: Arc::new(config),
            sandbox: SandboxPolicy::default(),
            frames,
        }
    }

    /// Lock the editor session for one operation.
    ///
    /// # Errors
    /// Returns [`AppError::SessionUnavailable`] if a previous holder panicked.
    pub fn lock_session(&self) -> Result<MutexGuard<'_, Session>, AppError> {
        self.session
            .lock()
            .map_err(|_| AppError::SessionUnavailable)
    }

    /// Subscribe to presented documents.
    pub fn subscribe(&self) -> watch::Receiver<PreviewFrame> {
        self.frames.clone()
    }

    /// Most recently presented document.
    pub fn latest_frame(&self) -> PreviewFrame {
        self.frames.borrow().clone()
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors_port = state.config.port;
    create_app_with_cors_port(state, allow_public_access, cors_port)
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn cors_layer(allow_public_access: bool, cors_port: u16) -> CorsLayer {
    let methods = [Method::GET, Method::PUT];
    if allow_public_access {
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any);
    }
    let origins: Vec<HeaderValue> = [
        format!("http://localhost:{}", cors_port),
        format!("http://127.0.0.1:{}", cors_port),
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

fn create_app_with_cors_port(state: AppState, allow_public_access: bool, cors_port: u16) -> Router {
    // Security headers only fill gaps: the preview handler sets its own
    // sandbox CSP and frame policy.
    let csp = SetResponseHeaderLayer::if_not_present(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(HOST_CONTENT_SECURITY_POLICY),
    );
    let nosniff = SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    let frame_options = SetResponseHeaderLayer::if_not_present(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("DENY"),
    );

    let body_limit = state.config.max_request_size;
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/api/session", get(handlers::session::get_session))
        .route("/api/session/tab", put(handlers::session::select_tab))
        .route("/api/session/buffer", put(handlers::session::edit_buffer))
        .route("/api/document", get(handlers::preview::get_document))
        .route("/preview", get(handlers::preview::get_preview))
        .route("/ws/preview", get(handlers::preview::preview_socket))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(allow_public_access, cors_port))
                .layer(csp)
                .layer(nosniff)
                .layer(frame_options),
        )
}

fn listener_cors_port(listener: &tokio::net::TcpListener, fallback_port: u16) -> u16 {
    listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(fallback_port)
}

/// Spawn the task that presents debounced renders once they fall due.
///
/// # Returns
/// `None` when the session renders on every edit and no ticker is needed.
pub fn spawn_render_ticker(state: &AppState) -> Option<JoinHandle<()>> {
    let RenderPolicy::Debounced(delay) = state.config.render_policy() else {
        return None;
    };
    let period = (delay / 4).max(MIN_TICKER_PERIOD);
    let session = state.session.clone();
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match session.lock() {
                Ok(mut session) => {
                    session.flush_due(Instant::now());
                }
                Err(_) => {
                    tracing::error!("Editor session lock poisoned; stopping render ticker");
                    break;
                }
            }
        }
    }))
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Returns
/// `Ok(())` when the server exits cleanly.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let cors_port = listener_cors_port(&listener, state.config.port);
    let ticker = spawn_render_ticker(&state);
    let app = create_app_with_cors_port(state, allow_public_access, cors_port);
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await;
    if let Some(ticker) = ticker {
        ticker.abort();
    }
    result
}
