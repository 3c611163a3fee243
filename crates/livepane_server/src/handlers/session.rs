//! Session HTTP handlers.

use crate::{error::HttpError, AppError, AppState, Session, Tab};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Static metadata for one tab.
#[derive(Debug, Serialize)]
pub struct TabInfo {
    pub id: Tab,
    pub label: &'static str,
    pub caption: String,
    pub placeholder: &'static str,
}

impl From<Tab> for TabInfo {
    fn from(tab: Tab) -> Self {
        Self {
            id: tab,
            label: tab.label(),
            caption: tab.editor_caption(),
            placeholder: tab.placeholder(),
        }
    }
}

/// Buffer contents keyed by tab id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferView {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl BufferView {
    pub(crate) fn from_session(session: &Session) -> Self {
        let buffers = session.buffers();
        Self {
            html: buffers.markup.clone(),
            css: buffers.style.clone(),
            js: buffers.script.clone(),
        }
    }
}

/// Full snapshot of the editor session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub active_tab: Tab,
    pub revision: u64,
    pub tabs: Vec<TabInfo>,
    pub buffers: BufferView,
}

impl SessionView {
    fn from_session(session: &Session) -> Self {
        Self {
            active_tab: session.active_tab(),
            revision: session.revision(),
            tabs: Tab::ALL.into_iter().map(TabInfo::from).collect(),
            buffers: BufferView::from_session(session),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectTabRequest {
    pub tab: String,
}

/// Edit addressed to one buffer.
///
/// The tab travels with the text: the session's active tab is shared with
/// other editors and may have moved since this client last read it.
#[derive(Debug, Deserialize)]
pub struct EditBufferRequest {
    pub tab: String,
    pub text: String,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

#[derive(Debug, Serialize)]
pub struct EditBufferResponse {
    pub active_tab: Tab,
    pub revision: u64,
    pub changed: bool,
}

/// `GET /api/session`
pub async fn get_session(State(state): State<AppState>) -> Result<Json<SessionView>, HttpError> {
    let session = state.lock_session()?;
    Ok(Json(SessionView::from_session(&session)))
}

/// `PUT /api/session/tab`
///
/// Only `html`, `css` and `js` are accepted; anything else is a 400 and
/// leaves the active tab unchanged.
pub async fn select_tab(
    State(state): State<AppState>,
    payload: Result<Json<SelectTabRequest>, JsonRejection>,
) -> Result<Json<SessionView>, HttpError> {
    let req = json_body(payload)?;
    let tab: Tab = req.tab.parse()?;
    let mut session = state.lock_session()?;
    session.select_tab(tab);
    Ok(Json(SessionView::from_session(&session)))
}

/// `PUT /api/session/buffer`
///
/// Selects `tab` and replaces its buffer verbatim under one lock, so an edit
/// never lands in a buffer the sender was not showing. Under the default
/// render policy the returned `revision` already includes this edit.
pub async fn edit_buffer(
    State(state): State<AppState>,
    payload: Result<Json<EditBufferRequest>, JsonRejection>,
) -> Result<Json<EditBufferResponse>, HttpError> {
    let req = json_body(payload)?;
    let tab: Tab = req.tab.parse()?;
    let mut session = state.lock_session()?;
    session.select_tab(tab);
    let changed = session.edit_active_buffer(req.text);
    Ok(Json(EditBufferResponse {
        active_tab: session.active_tab(),
        revision: session.revision(),
        changed,
    }))
}
