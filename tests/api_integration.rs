use axum_test::TestServer;
use livepane::{create_app, AppState, Buffers, Config, Tab};
use serde_json::{json, Value};

fn setup_test_server(buffers: Buffers) -> (TestServer, AppState) {
    let config = Config {
        port: 0, // Let OS assign port
        ..Config::default()
    };
    let state = AppState::with_buffers(config, buffers);
    let server = TestServer::new(create_app(state.clone(), false)).expect("test server");
    (server, state)
}

#[tokio::test]
async fn test_edit_lifecycle_through_facade() {
    let (server, state) = setup_test_server(Buffers::empty());

    let edit = server
        .put("/api/session/buffer")
        .json(&json!({ "tab": "html", "text": "<h1>Hello</h1>" }))
        .await;
    assert_eq!(edit.status_code().as_u16(), 200);

    let document: Value = server.get("/api/document").await.json();
    assert_eq!(document["revision"], 2);
    assert!(document["document"]
        .as_str()
        .expect("document")
        .contains("<body>\n<h1>Hello</h1>"));

    let session = state.lock_session().expect("session");
    assert_eq!(session.buffers().get(Tab::Markup), "<h1>Hello</h1>");
}

#[tokio::test]
async fn test_preview_served_as_sandboxed_html() {
    let (server, _state) = setup_test_server(Buffers::default());

    let response = server.get("/preview").await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body = response.text();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>Code Output</title>"));
    assert!(body.contains("JavaScript Error: "));
}
