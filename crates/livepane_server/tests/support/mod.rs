//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use livepane_server::{create_app, AppState, Buffers, Config};

pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

pub(crate) fn test_server_for_state(state: AppState) -> TestServer {
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_test_server() -> (TestServer, AppState) {
    let state = AppState::new(test_config());
    (test_server_for_state(state.clone()), state)
}

pub(crate) fn setup_blank_test_server() -> (TestServer, AppState) {
    let state = AppState::with_buffers(test_config(), Buffers::empty());
    (test_server_for_state(state.clone()), state)
}
