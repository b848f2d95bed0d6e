//! IME session management.
//!
//! The `ImeSession` struct tracks the host-side state that lives across key
//! events: which input mode is selected, the keyboard's shift/symbol layer,
//! and whether a composition is in progress.

use serde::{Deserialize, Serialize};

use crate::context::ImeContext;

/// Current input mode of the IME session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Keys go through the language composer (Hangul)
    #[default]
    Native,
    /// Keys are committed verbatim (Latin letters)
    Latin,
}

impl InputMode {
    /// The other mode, as selected by the language toggle key.
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Native => InputMode::Latin,
            InputMode::Latin => InputMode::Native,
        }
    }
}

/// Keyboard layer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub shifted: bool,
    pub shift_locked: bool,
    pub symbols: bool,
}

/// IME session state.
///
/// The session is separate from the composer - the composer owns the
/// in-progress syllable, while the session owns mode and layout state.
#[derive(Debug, Clone, Default)]
pub struct ImeSession {
    /// Current input mode
    mode: InputMode,

    /// Shift / symbol layer
    layout: LayoutState,

    /// Whether a composition is in progress
    active: bool,
}

impl ImeSession {
    /// Create a new empty session in the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session starting in `mode`.
    pub fn with_mode(mode: InputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Get the current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Set the input mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Get the layout state.
    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    /// Whether the next character should be shifted.
    pub fn is_shifted(&self) -> bool {
        self.layout.shifted || self.layout.shift_locked
    }

    /// Toggle the one-shot shift.
    pub fn toggle_shift(&mut self) {
        self.layout.shifted = !self.layout.shifted;
    }

    /// Toggle the shift lock. Releasing the lock also releases shift.
    pub fn toggle_shift_lock(&mut self) {
        self.layout.shift_locked = !self.layout.shift_locked;
        if !self.layout.shift_locked {
            self.layout.shifted = false;
        }
    }

    /// Release a one-shot shift after a character was typed.
    pub fn release_shift(&mut self) {
        if !self.layout.shift_locked {
            self.layout.shifted = false;
        }
    }

    /// Check if the symbol layer is showing.
    pub fn is_symbols(&self) -> bool {
        self.layout.symbols
    }

    /// Toggle the symbol layer.
    pub fn toggle_symbols(&mut self) {
        self.layout.symbols = !self.layout.symbols;
    }

    /// Check if the session is active (has a pending composition).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the session active or idle.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Clear the composition flag and layer state, keeping the input mode.
    pub fn clear(&mut self) {
        self.layout = LayoutState::default();
        self.active = false;
    }

    /// Write the mode indicator into the context.
    pub fn sync_to_context(&self, context: &mut ImeContext) {
        context.auxiliary_text = match (self.layout.symbols, self.mode) {
            (true, _) => "?123".to_string(),
            (false, InputMode::Native) => "한".to_string(),
            (false, InputMode::Latin) => "A".to_string(),
        };
    }
}
