//! Preview handlers: the rendered document and its live revision feed.

use super::session::BufferView;
use crate::{AppState, PreviewFrame};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub revision: u64,
    pub document: String,
}

/// Pushed over `/ws/preview` each time a document is presented.
///
/// Carries the buffers as well as the revision so a browser editor can catch
/// up with edits made by another editor on the same session.
#[derive(Debug, Serialize)]
pub struct PreviewUpdate {
    pub revision: u64,
    pub buffers: BufferView,
}

/// `GET /api/document`: the latest presented document as JSON.
pub async fn get_document(State(state): State<AppState>) -> Json<DocumentResponse> {
    let frame = state.latest_frame();
    Json(DocumentResponse {
        revision: frame.revision,
        document: frame.document.to_string(),
    })
}

/// `GET /preview`: the latest presented document, sandboxed.
///
/// Served with a `sandbox` CSP so the document runs in the same capability
/// set whether it is framed by the editor page or opened directly.
pub async fn get_preview(State(state): State<AppState>) -> Response {
    let frame = state.latest_frame();
    let mut response = frame.document.to_string().into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    if let Ok(csp) = HeaderValue::from_str(&state.sandbox.content_security_policy()) {
        headers.insert(header::CONTENT_SECURITY_POLICY, csp);
    }
    if let Ok(revision) = HeaderValue::from_str(&frame.revision.to_string()) {
        headers.insert("x-livepane-revision", revision);
    }
    response
}

/// `GET /ws/preview`: pushes a [`PreviewUpdate`] once on connect and then
/// whenever a document is presented.
pub async fn preview_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_revisions(socket, state))
}

fn preview_update(state: &AppState, frame: &PreviewFrame) -> Option<Message> {
    // The frame is a clone: holding the watch borrow while waiting on the
    // session lock would deadlock against `present`.
    let buffers = match state.lock_session() {
        Ok(session) => BufferView::from_session(&session),
        Err(err) => {
            warn!("Preview socket cannot read session: {}", err);
            return None;
        }
    };
    let update = PreviewUpdate {
        revision: frame.revision,
        buffers,
    };
    serde_json::to_string(&update).ok().map(Message::Text)
}

async fn stream_revisions(mut socket: WebSocket, state: AppState) {
    info!("Preview socket connected");
    let mut frames: watch::Receiver<PreviewFrame> = state.subscribe();
    loop {
        let frame = frames.borrow_and_update().clone();
        let Some(message) = preview_update(&state, &frame) else {
            return;
        };
        if socket.send(message).await.is_err() {
            debug!("Preview socket send failed; closing");
            return;
        }

        loop {
            tokio::select! {
                changed = frames.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    break;
                }
                incoming = socket.recv() => match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => {
                        info!("Preview socket closed");
                        return;
                    }
                    Some(Ok(_)) => {}
                },
            }
        }
    }
}
