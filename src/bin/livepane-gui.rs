#![cfg(feature = "gui")]
//! Desktop editor entrypoint for the workspace root.

fn main() {
    if let Err(err) = livepane_gui::run() {
        eprintln!("livepane gui failed: {}", err);
    }
}
