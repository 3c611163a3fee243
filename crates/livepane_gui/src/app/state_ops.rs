//! Session operations issued by the UI and the per-frame mirror sync.

use super::{LivePaneApp, StatusMessage, STATUS_TTL};
use livepane_core::Tab;
use std::time::{Duration, Instant};
use tracing::warn;

impl LivePaneApp {
    /// Sets the status banner message.
    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    /// Switch the session's active tab and load its buffer into the editor.
    pub(super) fn select_tab(&mut self, tab: Tab) {
        let err = match self.state.lock_session() {
            Ok(mut session) => {
                session.select_tab(tab);
                self.active_tab = tab;
                self.editor_text.clear();
                self.editor_text.push_str(session.active_text());
                return;
            }
            Err(err) => err,
        };
        warn!("tab switch failed: {}", err);
        self.set_status("Editor session unavailable; restart the app.");
    }

    /// Commit the editor mirror to the active buffer.
    ///
    /// # Returns
    /// `true` when the session accepted a changed buffer.
    pub(super) fn commit_editor_text(&mut self) -> bool {
        let result = self.state.lock_session().map(|mut session| {
            // A browser client may have switched tabs since the last frame.
            if session.active_tab() != self.active_tab {
                session.select_tab(self.active_tab);
            }
            let changed = session.edit_active_buffer(self.editor_text.clone());
            (changed, session.revision())
        });
        match result {
            Ok((changed, revision)) => {
                self.revision = revision;
                changed
            }
            Err(err) => {
                warn!("edit failed: {}", err);
                self.set_status("Editor session unavailable; edit was not applied.");
                false
            }
        }
    }

    /// Flush due debounced renders and pull session state into the UI mirror.
    ///
    /// # Returns
    /// Time until the next debounced render is due, if one is pending.
    pub(super) fn sync_from_session(&mut self, now: Instant) -> Option<Duration> {
        let next_flush = {
            let mut session = match self.state.lock_session() {
                Ok(session) => session,
                Err(err) => {
                    warn!("session sync failed: {}", err);
                    return None;
                }
            };
            session.flush_due(now);
            self.active_tab = session.active_tab();
            if self.editor_text != session.active_text() {
                self.editor_text.clear();
                self.editor_text.push_str(session.active_text());
            }
            self.revision = session.revision();
            session.next_flush_in(now)
        };

        let frame = self.state.latest_frame();
        if self.document.as_str() != &*frame.document {
            self.document.clear();
            self.document.push_str(&frame.document);
        }
        next_flush
    }

    /// Character count of the active buffer.
    pub(super) fn active_text_chars(&self) -> usize {
        self.editor_text.chars().count()
    }

    /// URL of the live browser editor.
    pub(super) fn editor_url(&self) -> String {
        format!("{}/", self.preview_url)
    }

    /// URL of the standalone sandboxed preview.
    pub(super) fn standalone_preview_url(&self) -> String {
        format!("{}/preview", self.preview_url)
    }
}
