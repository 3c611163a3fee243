//! Editor session: the three source buffers, the active tab, and the preview
//! surface they render into.

use crate::defaults::{DEFAULT_MARKUP, DEFAULT_SCRIPT, DEFAULT_STYLE};
use crate::render::render_document;
use crate::Tab;
use std::time::{Duration, Instant};
use tracing::debug;

/// Source text for each tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffers {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Default for Buffers {
    fn default() -> Self {
        Self {
            markup: DEFAULT_MARKUP.to_string(),
            style: DEFAULT_STYLE.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

impl Buffers {
    /// Empty buffers, useful for tests and blank sessions.
    pub fn empty() -> Self {
        Self {
            markup: String::new(),
            style: String::new(),
            script: String::new(),
        }
    }

    /// Text of the buffer bound to `tab`.
    pub fn get(&self, tab: Tab) -> &str {
        match tab {
            Tab::Markup => &self.markup,
            Tab::Style => &self.style,
            Tab::Script => &self.script,
        }
    }

    fn slot_mut(&mut self, tab: Tab) -> &mut String {
        match tab {
            Tab::Markup => &mut self.markup,
            Tab::Style => &mut self.style,
            Tab::Script => &mut self.script,
        }
    }

    /// Replace the buffer bound to `tab`.
    ///
    /// # Returns
    /// `true` when the stored text actually changed.
    pub fn set(&mut self, tab: Tab, text: String) -> bool {
        let slot = self.slot_mut(tab);
        if *slot == text {
            return false;
        }
        *slot = text;
        true
    }

    /// Compose the preview document from the current buffers.
    pub fn render(&self) -> String {
        render_document(&self.markup, &self.style, &self.script)
    }
}

/// Destination for rendered documents.
///
/// Every call replaces whatever the surface showed before; implementations
/// never patch.
pub trait PreviewSurface {
    /// Show `document` as the new preview. `revision` increases by one per call.
    fn present(&mut self, revision: u64, document: &str);
}

/// When edits reach the preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Render and present synchronously after every buffer change.
    #[default]
    EveryEdit,
    /// Render once no edit has arrived for the given delay.
    Debounced(Duration),
}

/// Single-writer editor state bound to one preview surface.
pub struct EditorSession<S> {
    buffers: Buffers,
    active: Tab,
    surface: S,
    policy: RenderPolicy,
    revision: u64,
    pending_since: Option<Instant>,
}

impl<S: PreviewSurface> EditorSession<S> {
    /// Session with default buffers that renders on every edit.
    ///
    /// The initial document is presented before this returns.
    pub fn new(surface: S) -> Self {
        Self::with_buffers(Buffers::default(), surface, RenderPolicy::EveryEdit)
    }

    /// Session with default buffers and an explicit render policy.
    pub fn with_policy(surface: S, policy: RenderPolicy) -> Self {
        Self::with_buffers(Buffers::default(), surface, policy)
    }

    /// Session starting from `buffers`; presents the initial document.
    pub fn with_buffers(buffers: Buffers, surface: S, policy: RenderPolicy) -> Self {
        let mut session = Self {
            buffers,
            active: Tab::default(),
            surface,
            policy,
            revision: 0,
            pending_since: None,
        };
        session.present();
        session
    }

    /// Currently selected tab.
    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// All buffers.
    pub fn buffers(&self) -> &Buffers {
        &self.buffers
    }

    /// Text bound to the visible editor.
    pub fn active_text(&self) -> &str {
        self.buffers.get(self.active)
    }

    /// Number of documents presented so far (the initial one included).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Whether an edit is waiting for the debounce delay to elapse.
    pub fn has_pending_render(&self) -> bool {
        self.pending_since.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Switch the visible buffer. Never touches buffer content or the preview.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active != tab {
            debug!(from = %self.active, to = %tab, "tab switched");
        }
        self.active = tab;
    }

    /// Replace the active buffer with `text` verbatim.
    ///
    /// Under [`RenderPolicy::EveryEdit`] the new document is presented before
    /// this returns; under [`RenderPolicy::Debounced`] presentation is deferred
    /// to [`Self::flush_due`].
    ///
    /// # Returns
    /// `true` when the buffer changed. Writing identical text is a no-op.
    pub fn edit_active_buffer(&mut self, text: impl Into<String>) -> bool {
        if !self.buffers.set(self.active, text.into()) {
            return false;
        }
        match self.policy {
            RenderPolicy::EveryEdit => self.present(),
            RenderPolicy::Debounced(_) => self.pending_since = Some(Instant::now()),
        }
        true
    }

    /// Build the document for the current buffers without presenting it.
    pub fn render(&self) -> String {
        self.buffers.render()
    }

    /// Time left before a debounced render becomes due.
    ///
    /// # Returns
    /// `None` when nothing is pending, `Some(Duration::ZERO)` when overdue.
    pub fn next_flush_in(&self, now: Instant) -> Option<Duration> {
        let since = self.pending_since?;
        let delay = match self.policy {
            RenderPolicy::EveryEdit => Duration::ZERO,
            RenderPolicy::Debounced(delay) => delay,
        };
        Some(delay.saturating_sub(now.saturating_duration_since(since)))
    }

    /// Present a pending render once its debounce delay has elapsed.
    ///
    /// # Returns
    /// `true` when a document was presented.
    pub fn flush_due(&mut self, now: Instant) -> bool {
        match self.next_flush_in(now) {
            Some(remaining) if remaining.is_zero() => {
                self.present();
                true
            }
            _ => false,
        }
    }

    /// Present a pending render immediately, ignoring the debounce delay.
    ///
    /// # Returns
    /// `true` when a document was presented.
    pub fn flush(&mut self) -> bool {
        if self.pending_since.is_none() {
            return false;
        }
        self.present();
        true
    }

    fn present(&mut self) {
        let document = self.render();
        self.revision += 1;
        self.pending_since = None;
        debug!(
            revision = self.revision,
            bytes = document.len(),
            "presenting preview document"
        );
        self.surface.present(self.revision, &document);
    }
}
