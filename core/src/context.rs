//! IME context for platform communication.
//!
//! The `ImeContext` struct is a simple data container with public fields that
//! platforms use to communicate with the IME. After calling `process_key()` on
//! an engine, the platform reads these fields to update the UI and the
//! document.
//!
//! The context is also the engine's [`TextSurface`]: composers write preedit
//! and commit text straight into it.

use crate::surface::TextSurface;

/// IME context for platform communication.
///
/// # Fields
///
/// - `preedit_text`: Text being composed (displayed with underline)
/// - `preedit_cursor`: Cursor position within preedit (byte offset)
/// - `commit_text`: Text to commit to application (consume and clear)
/// - `auxiliary_text`: Optional hint text (e.g., "한" / "A" mode indicator)
#[derive(Debug, Clone, Default)]
pub struct ImeContext {
    /// Text being composed (preedit)
    pub preedit_text: String,

    /// Cursor position within preedit text (byte offset)
    pub preedit_cursor: usize,

    /// Text to commit to the application
    pub commit_text: String,

    /// Auxiliary text for UI hints
    pub auxiliary_text: String,
}

impl ImeContext {
    /// Create a new empty IME context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear preedit and auxiliary state.
    /// Does NOT clear commit_text (platform should consume it first).
    pub fn clear(&mut self) {
        self.preedit_text.clear();
        self.preedit_cursor = 0;
        self.auxiliary_text.clear();
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Check if there's any visible state (preedit).
    pub fn has_visible_state(&self) -> bool {
        !self.preedit_text.is_empty()
    }

    /// Check if there's text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }
}

impl TextSurface for ImeContext {
    fn set_composing_text(&mut self, text: &str) {
        self.preedit_text.clear();
        self.preedit_text.push_str(text);
        self.preedit_cursor = self.preedit_text.len();
    }

    fn commit_text(&mut self, text: &str) {
        // Several commits may happen within one key event; they accumulate.
        self.commit_text.push_str(text);
        self.preedit_text.clear();
        self.preedit_cursor = 0;
    }

    fn finish_composing_text(&mut self) {
        let pending = std::mem::take(&mut self.preedit_text);
        self.commit_text.push_str(&pending);
        self.preedit_cursor = 0;
    }
}
