//! App tests that drive the editor mirror against a live embedded session.

use super::*;
use livepane_core::defaults::{DEFAULT_MARKUP, DEFAULT_SCRIPT, DEFAULT_STYLE};
use livepane_core::Buffers;


fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

fn make_app() -> LivePaneApp {
    LivePaneApp::with_state(AppState::new(test_config()), false).expect("app")
}

fn make_blank_app() -> LivePaneApp {
    LivePaneApp::with_state(AppState::with_buffers(test_config(), Buffers::empty()), false)
        .expect("app")
}

fn run_frame(app: &mut LivePaneApp, ctx: &egui::Context, render: fn(&mut LivePaneApp, &egui::Context)) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        render(app, ctx);
    });
}
