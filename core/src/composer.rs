//! Composer trait.
//!
//! A composer is the language-specific half of the IME: it owns the
//! in-progress composition and turns single key code points into composing
//! and committed text on a [`TextSurface`]. The host half ([`crate::ImeEngine`])
//! decides when a composer sees a key and when its pending text must be
//! committed.

use crate::surface::TextSurface;

/// Language composer driven by the host engine.
///
/// # Example
///
/// ```no_run
/// use libkorean_core::{Composer, ImeContext};
/// # fn demo(composer: &mut dyn Composer) {
/// let mut context = ImeContext::new();
/// if !composer.process('ㅎ' as u32, &mut context) {
///     composer.commit_pending(&mut context);
/// }
/// # }
/// ```
pub trait Composer {
    /// Feed one key's code point. Returns true if the composer consumed it.
    ///
    /// Unconsumed input leaves the composer unchanged; the host commits the
    /// pending composition and inserts the character itself.
    fn process(&mut self, code: u32, surface: &mut dyn TextSurface) -> bool;

    /// Remove one layer of the pending composition.
    ///
    /// Returns false when nothing is pending so the host can delete the
    /// character before the cursor.
    fn handle_backspace(&mut self, surface: &mut dyn TextSurface) -> bool;

    /// Commit the pending composition, if any, and become empty.
    fn commit_pending(&mut self, surface: &mut dyn TextSurface);

    /// Drop the pending composition without committing it.
    fn reset(&mut self, surface: Option<&mut dyn TextSurface>);

    /// Check if a composition is pending.
    fn is_composing(&self) -> bool;

    /// Map a key label to its shifted form on this composer's layout.
    fn shifted(&self, ch: char) -> char {
        crate::utils::shift_latin(ch)
    }

    /// Get a human-readable name for this composer (for logging).
    fn name(&self) -> &'static str;
}
