//! Embedded server tests over a real socket.

mod support;

use livepane_server::{AppState, EmbeddedServer, Tab};
use serde_json::{json, Value};
use std::net::TcpListener;
use support::test_config;

#[test]
fn embedded_server_serves_edits_made_through_shared_session() {
    let state = AppState::new(test_config());
    let server = EmbeddedServer::start(state.clone(), false).expect("server");
    assert!(server.addr().ip().is_loopback());

    {
        let mut session = state.lock_session().expect("session");
        session.select_tab(Tab::Markup);
        session.edit_active_buffer("<main>from the desktop editor</main>");
    }

    let client = reqwest::blocking::Client::new();
    let body = client
        .get(format!("{}/preview", server.base_url()))
        .send()
        .expect("preview request")
        .text()
        .expect("preview body");
    assert!(body.contains("<main>from the desktop editor</main>"));

    let edit: Value = client
        .put(format!("{}/api/session/buffer", server.base_url()))
        .json(&json!({ "tab": "html", "text": "<main>from the browser</main>" }))
        .send()
        .expect("edit request")
        .json()
        .expect("edit response");
    assert_eq!(edit["revision"], 3);
    assert_eq!(
        state.lock_session().expect("session").active_text(),
        "<main>from the browser</main>"
    );

    drop(server);
}

#[test]
fn embedded_server_falls_back_when_port_is_taken() {
    let occupied = TcpListener::bind("127.0.0.1:0").expect("occupy port");
    let port = occupied.local_addr().expect("addr").port();
    let mut config = test_config();
    config.port = port;

    let server = EmbeddedServer::start(AppState::new(config), false).expect("server");
    assert!(server.used_fallback());
    assert_ne!(server.addr().port(), port);
}
