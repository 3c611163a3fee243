//! Host editor page.

use crate::AppState;
use axum::{extract::State, response::Html};

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");
const SANDBOX_PLACEHOLDER: &str = "{{SANDBOX}}";

/// Fill the page template with the preview sandbox tokens.
pub fn render_index(state: &AppState) -> String {
    INDEX_TEMPLATE.replace(SANDBOX_PLACEHOLDER, &state.sandbox.iframe_tokens())
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state))
}
