//! Text surface capability.
//!
//! A composer never touches the document directly. It drives a host-owned
//! surface through three calls: show provisional ("composing") text at the
//! cursor, commit final text, and end the composing region. Platforms wrap
//! their input connection in this trait; tests use [`RecordingSurface`].

/// Host text surface a composer writes into.
///
/// All calls are synchronous. Implementations must treat a `commit_text`
/// as replacing any active composing region.
pub trait TextSurface {
    /// Show `text` as an uncommitted, still-editable preview at the cursor.
    fn set_composing_text(&mut self, text: &str);

    /// Finalize `text` into the document, clearing any composing region.
    fn commit_text(&mut self, text: &str);

    /// End the composing region without altering document contents.
    fn finish_composing_text(&mut self);
}

/// A single call observed by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetComposing(String),
    Commit(String),
    FinishComposing,
}

/// In-memory surface that records every call and maintains the resulting
/// document text.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    committed: String,
    composing: String,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in the order they were received.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Text committed so far.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Current composing region.
    pub fn composing(&self) -> &str {
        &self.composing
    }

    /// Committed text followed by the composing region, as the user sees it.
    pub fn visible_text(&self) -> String {
        format!("{}{}", self.committed, self.composing)
    }

    /// Number of `commit_text` calls received.
    pub fn commit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Commit(_)))
            .count()
    }

    /// Forget recorded calls, keeping the document state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl TextSurface for RecordingSurface {
    fn set_composing_text(&mut self, text: &str) {
        self.calls.push(SurfaceCall::SetComposing(text.to_string()));
        self.composing = text.to_string();
    }

    fn commit_text(&mut self, text: &str) {
        self.calls.push(SurfaceCall::Commit(text.to_string()));
        self.composing.clear();
        self.committed.push_str(text);
    }

    fn finish_composing_text(&mut self) {
        self.calls.push(SurfaceCall::FinishComposing);
        // Whatever was composing stays in the document.
        let pending = std::mem::take(&mut self.composing);
        self.committed.push_str(&pending);
    }
}
