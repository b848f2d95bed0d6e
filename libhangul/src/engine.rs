//! Hangul IME factory for libhangul
//!
//! Wires a [`HangulComposer`] into the generic host engine from core and
//! offers a batch helper that replays a string of keys through it.

use libkorean_core::{ImeEngine, KeyEvent, KeyResult};
use tracing::debug;

use crate::composer::HangulComposer;
use crate::config::HangulConfig;

/// Host engine driving a Hangul composer.
pub type HangulIme = ImeEngine<HangulComposer>;

/// Create an IME engine from a validated configuration.
///
/// # Example
///
/// ```rust
/// use libhangul::{compose_str, create_ime_engine, HangulConfig};
///
/// let mut ime = create_ime_engine(HangulConfig::default()).unwrap();
/// assert_eq!(compose_str(&mut ime, "ㅎㅏㄴㄱㅡㄹ"), "한글");
/// ```
pub fn create_ime_engine(config: HangulConfig) -> anyhow::Result<HangulIme> {
    config.validate()?;
    debug!(
        null_initial = %config.null_initial,
        shift_doubles = config.shift_doubles,
        "creating hangul ime"
    );
    let composer = HangulComposer::from_config(&config);
    Ok(ImeEngine::with_config(composer, config.into_base()))
}

/// Create an IME engine with the default configuration.
pub fn create_default_ime_engine() -> HangulIme {
    ImeEngine::new(HangulComposer::new())
}

/// Feed `input` through `ime` one key per char and return the text that
/// would end up in the document.
///
/// Space, newline and backspace (`\u{8}`) are sent as their keys; a
/// backspace the IME does not handle deletes the last output char. Pending
/// composition is committed at the end.
pub fn compose_str(ime: &mut HangulIme, input: &str) -> String {
    let mut output = String::new();
    for ch in input.chars() {
        let key = match ch {
            ' ' => KeyEvent::Space,
            '\n' => KeyEvent::Enter,
            '\u{8}' => KeyEvent::Backspace,
            _ => KeyEvent::Char(ch),
        };
        let result = ime.process_key(key);
        output.push_str(&ime.context_mut().take_commit());
        match (key, result) {
            (KeyEvent::Enter, _) => output.push('\n'),
            (KeyEvent::Backspace, KeyResult::NotHandled) => {
                output.pop();
            }
            _ => {}
        }
    }
    ime.commit_pending();
    output.push_str(&ime.context_mut().take_commit());
    output
}
