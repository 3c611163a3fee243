//! Embedded server helper for running the preview server inside another
//! process (the desktop editor).

use crate::{resolve_bind_address, serve_router, AppError, AppState};
use std::{
    net::SocketAddr,
    sync::mpsc,
    thread::{self, JoinHandle},
};
use tokio::sync::oneshot;
use tracing::{info, warn};

type ReadyMessage = Result<(SocketAddr, bool), String>;

/// Handle to a preview server running on a background thread.
///
/// Dropping the handle shuts the server down and joins its thread.
pub struct EmbeddedServer {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
    addr: SocketAddr,
    used_fallback: bool,
}

impl EmbeddedServer {
    /// Start the server on a background thread with its own tokio runtime.
    ///
    /// Binds to `BIND` or `127.0.0.1:PORT`; if that address is taken, falls
    /// back to an OS-assigned port on the same interface.
    ///
    /// # Errors
    /// Returns [`AppError::Server`] if the runtime, thread, or socket cannot
    /// be created.
    pub fn start(state: AppState, allow_public: bool) -> Result<Self, AppError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (ready_tx, ready_rx) = mpsc::channel::<ReadyMessage>();

        let thread = thread::Builder::new()
            .name("livepane-embedded-server".into())
            .spawn(move || run_server_thread(state, allow_public, shutdown_rx, ready_tx))
            .map_err(|err| AppError::Server(format!("failed to spawn server: {}", err)))?;

        let outcome = ready_rx.recv();
        match outcome {
            Ok(Ok((addr, used_fallback))) => {
                if !addr.ip().is_loopback() {
                    warn!("binding to non-localhost address {}", addr);
                }
                Ok(Self {
                    shutdown: Some(shutdown_tx),
                    thread: Some(thread),
                    addr,
                    used_fallback,
                })
            }
            Ok(Err(message)) => {
                let _ = thread.join();
                Err(AppError::Server(message))
            }
            Err(_) => {
                let _ = thread.join();
                Err(AppError::Internal)
            }
        }
    }

    /// Address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:38517`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Whether the requested address was busy and an auto-assigned port was used.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }
}

impl Drop for EmbeddedServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

fn run_server_thread(
    state: AppState,
    allow_public: bool,
    shutdown_rx: oneshot::Receiver<()>,
    ready_tx: mpsc::Sender<ReadyMessage>,
) {
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(err) => {
            let _ = ready_tx.send(Err(format!("failed to start runtime: {}", err)));
            return;
        }
    };

    let bind_addr = resolve_bind_address(&state.config, allow_public);
    let mut used_fallback = false;
    let listener = match rt.block_on(tokio::net::TcpListener::bind(bind_addr)) {
        Ok(listener) => listener,
        Err(err) if err.kind() == std::io::ErrorKind::AddrInUse => {
            warn!(
                "Preview bind address {} is in use; falling back to an auto port",
                bind_addr
            );
            used_fallback = true;
            let fallback_addr = SocketAddr::new(bind_addr.ip(), 0);
            match rt.block_on(tokio::net::TcpListener::bind(fallback_addr)) {
                Ok(listener) => listener,
                Err(fallback_err) => {
                    let _ = ready_tx.send(Err(format!(
                        "failed to bind server socket: {}",
                        fallback_err
                    )));
                    return;
                }
            }
        }
        Err(err) => {
            let _ = ready_tx.send(Err(format!("failed to bind server socket: {}", err)));
            return;
        }
    };

    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    if used_fallback {
        warn!(
            "Preview listening on http://{} (auto port; {} was in use)",
            actual_addr, bind_addr
        );
    } else {
        info!("Preview listening on http://{}", actual_addr);
    }
    let _ = ready_tx.send(Ok((actual_addr, used_fallback)));

    let shutdown = async {
        let _ = shutdown_rx.await;
    };
    if let Err(err) = rt.block_on(serve_router(listener, state, allow_public, shutdown)) {
        warn!("server error: {}", err);
    }
}
