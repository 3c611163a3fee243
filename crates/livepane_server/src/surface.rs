//! Preview surface that publishes each rendered document on a watch channel.

use livepane_core::PreviewSurface;
use std::sync::Arc;
use tokio::sync::watch;

/// One presented document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    pub revision: u64,
    pub document: Arc<str>,
}

impl Default for PreviewFrame {
    fn default() -> Self {
        Self {
            revision: 0,
            document: Arc::from(""),
        }
    }
}

/// Publishes presented documents to every subscribed preview.
///
/// Only the latest frame is retained; slow subscribers skip intermediate
/// revisions.
pub struct WatchSurface {
    tx: watch::Sender<PreviewFrame>,
}

impl WatchSurface {
    /// Create a surface and the receiver observing it.
    pub fn channel() -> (Self, watch::Receiver<PreviewFrame>) {
        let (tx, rx) = watch::channel(PreviewFrame::default());
        (Self { tx }, rx)
    }
}

impl PreviewSurface for WatchSurface {
    fn present(&mut self, revision: u64, document: &str) {
        self.tx.send_replace(PreviewFrame {
            revision,
            document: Arc::from(document),
        });
    }
}
