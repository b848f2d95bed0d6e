//! IME engine with session management and key event processing.
//!
//! The `ImeEngine` wraps a language [`Composer`] with session state
//! management, providing a `process_key()` method that handles key events and
//! keeps the composer's pending text consistent with the document: whatever
//! is being composed is committed before a non-composing character is
//! inserted, before the layout or language changes, and before focus leaves.

use tracing::{debug, trace};

use crate::composer::Composer;
use crate::context::ImeContext;
use crate::session::{ImeSession, InputMode};
use crate::surface::TextSurface;
use crate::Config;

/// Key event types that the IME can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character key (jamo, letter, digit, punctuation)
    Char(char),
    /// Backspace key
    Backspace,
    /// Space key
    Space,
    /// Enter/Return key
    Enter,
    /// Escape key (discard composition)
    Escape,
    /// One-shot shift
    Shift,
    /// Shift lock toggle
    ShiftLock,
    /// Language toggle key (한/영)
    ToggleMode,
    /// Symbol layer toggle (?123)
    ToggleSymbols,
    /// The editor lost input focus
    FocusLost,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the IME
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

/// IME engine with session management.
///
/// After each `process_key()` the platform reads [`ImeEngine::context`]:
/// `commit_text` holds what must be inserted into the document for this key
/// and `preedit_text` the provisional text to show at the cursor.
pub struct ImeEngine<C: Composer> {
    /// Language composer
    composer: C,

    /// Session state
    session: ImeSession,

    /// Context for platform communication
    context: ImeContext,

    /// Host behaviour switches
    config: Config,
}

impl<C: Composer> ImeEngine<C> {
    /// Create a new IME engine with default configuration.
    pub fn new(composer: C) -> Self {
        Self::with_config(composer, Config::default())
    }

    /// Create a new IME engine with the given configuration.
    pub fn with_config(composer: C, config: Config) -> Self {
        let session = ImeSession::with_mode(config.default_mode);
        let mut context = ImeContext::new();
        session.sync_to_context(&mut context);
        Self {
            composer,
            session,
            context,
            config,
        }
    }

    /// Get a reference to the context for reading IME state.
    pub fn context(&self) -> &ImeContext {
        &self.context
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut ImeContext {
        &mut self.context
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &ImeSession {
        &self.session
    }

    /// Get a reference to the composer.
    pub fn composer(&self) -> &C {
        &self.composer
    }

    /// Get the host configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset the IME to initial state, discarding any pending composition.
    pub fn reset(&mut self) {
        let surface: &mut dyn TextSurface = &mut self.context;
        self.composer.reset(Some(surface));
        self.session.clear();
        self.context.clear();
        self.session.sync_to_context(&mut self.context);
    }

    /// Commit whatever the composer has pending into `commit_text`.
    pub fn commit_pending(&mut self) {
        if self.composer.is_composing() {
            debug!(composer = self.composer.name(), "committing pending composition");
        }
        self.composer.commit_pending(&mut self.context);
        self.session.set_active(false);
    }

    /// Process a key event and update IME state.
    ///
    /// This is the main entry point for IME interaction. After calling this,
    /// the platform should read `context()` to update the UI and insert
    /// `commit_text`.
    ///
    /// Returns `KeyResult::Handled` if the IME consumed the key,
    /// or `KeyResult::NotHandled` if it should pass through to the application.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        // Clear commit text from previous key
        self.context.commit_text.clear();
        trace!(?key, mode = ?self.session.mode(), "process_key");

        let result = match key {
            KeyEvent::Char(ch) => self.handle_char(ch),
            KeyEvent::Backspace => {
                if self.composer.handle_backspace(&mut self.context) {
                    KeyResult::Handled
                } else {
                    // Nothing composing: the application deletes
                    KeyResult::NotHandled
                }
            }
            KeyEvent::Space => {
                self.commit_pending();
                self.context.commit_text(" ");
                KeyResult::Handled
            }
            KeyEvent::Enter => {
                self.commit_pending();
                KeyResult::NotHandled
            }
            KeyEvent::Escape => {
                if self.composer.is_composing() {
                    let surface: &mut dyn TextSurface = &mut self.context;
                    self.composer.reset(Some(surface));
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyEvent::Shift => {
                self.session.toggle_shift();
                KeyResult::Handled
            }
            KeyEvent::ShiftLock => {
                self.session.toggle_shift_lock();
                KeyResult::Handled
            }
            KeyEvent::ToggleMode => {
                self.commit_pending();
                let mode = self.session.mode().toggled();
                self.session.set_mode(mode);
                debug!(?mode, "input mode switched");
                KeyResult::Handled
            }
            KeyEvent::ToggleSymbols => {
                self.commit_pending();
                self.session.toggle_symbols();
                debug!(symbols = self.session.is_symbols(), "symbol layer switched");
                KeyResult::Handled
            }
            KeyEvent::FocusLost => {
                self.commit_pending();
                self.context.finish_composing_text();
                self.session.clear();
                KeyResult::Handled
            }
        };

        self.session.set_active(self.composer.is_composing());
        self.session.sync_to_context(&mut self.context);
        result
    }

    /// Handle a character key.
    fn handle_char(&mut self, ch: char) -> KeyResult {
        let shifted = self.session.is_shifted();
        if self.config.one_shot_shift {
            self.session.release_shift();
        }

        if self.session.is_symbols() || self.session.mode() == InputMode::Latin {
            let ch = if shifted && !self.session.is_symbols() {
                crate::utils::shift_latin(ch)
            } else {
                ch
            };
            self.commit_char(ch);
            return KeyResult::Handled;
        }

        let ch = if shifted { self.composer.shifted(ch) } else { ch };
        if !self.composer.process(u32::from(ch), &mut self.context) {
            self.commit_char(ch);
        }
        KeyResult::Handled
    }

    /// Commit pending composition, then `ch` verbatim.
    fn commit_char(&mut self, ch: char) {
        self.commit_pending();
        let mut buf = [0u8; 4];
        self.context.commit_text(ch.encode_utf8(&mut buf));
    }
}
