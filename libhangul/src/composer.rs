//! Hangul syllable composer.
//!
//! Turns a stream of compatibility jamo, one per key press, into precomposed
//! syllables. The syllable being built is shown as composing text; a syllable
//! is committed as soon as the next key can no longer belong to it.
//!
//! ```text
//! ㅎ   -> [ㅎ]
//! ㅏ   -> [하]
//! ㄴ   -> [한]
//! ㅈ   -> [핝]          ㄴ + ㅈ = ㄵ
//! ㅏ   -> 한 [자]       ㄵ splits, ㅈ starts the next syllable
//! ```

use libkorean_core::{utils, Composer, TextSurface};
use tracing::{debug, trace};

use crate::config::HangulConfig;
use crate::jamo;
use crate::layout;

/// The syllable under composition.
///
/// A final consonant can only exist together with a vowel, so the four
/// shapes below are the only reachable slot combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syllable {
    /// Nothing pending
    #[default]
    Empty,
    /// Lone initial consonant
    Initial { cho: u8 },
    /// Initial and vowel, final explicitly none
    Open { cho: u8, jung: u8 },
    /// Initial, vowel and final consonant or cluster (`jong` >= 1)
    Closed { cho: u8, jung: u8, jong: u8 },
}

impl Syllable {
    /// Build an `Open` or `Closed` syllable depending on `jong`.
    pub fn with_final(cho: u8, jung: u8, jong: u8) -> Self {
        if jong == jamo::NO_JONGSEONG {
            Syllable::Open { cho, jung }
        } else {
            Syllable::Closed { cho, jung, jong }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Syllable::Empty)
    }

    /// Choseong index, if set.
    pub fn initial(&self) -> Option<u8> {
        match *self {
            Syllable::Empty => None,
            Syllable::Initial { cho }
            | Syllable::Open { cho, .. }
            | Syllable::Closed { cho, .. } => Some(cho),
        }
    }

    /// Jungseong index, if set.
    pub fn medial(&self) -> Option<u8> {
        match *self {
            Syllable::Empty | Syllable::Initial { .. } => None,
            Syllable::Open { jung, .. } | Syllable::Closed { jung, .. } => Some(jung),
        }
    }

    /// Jongseong index: `None` while unset, `Some(0)` once a vowel is in
    /// place and no final follows it.
    pub fn final_consonant(&self) -> Option<u8> {
        match *self {
            Syllable::Empty | Syllable::Initial { .. } => None,
            Syllable::Open { .. } => Some(jamo::NO_JONGSEONG),
            Syllable::Closed { jong, .. } => Some(jong),
        }
    }

    /// Text of the syllable: a precomposed block, a lone compatibility
    /// consonant, or nothing.
    pub fn render(&self) -> String {
        let ch = match *self {
            Syllable::Empty => None,
            Syllable::Initial { cho } => jamo::choseong_to_jamo(cho),
            Syllable::Open { cho, jung } => jamo::compose_syllable(cho, jung, jamo::NO_JONGSEONG),
            Syllable::Closed { cho, jung, jong } => jamo::compose_syllable(cho, jung, jong),
        };
        ch.map(String::from).unwrap_or_default()
    }
}

/// Per-session Hangul composition state machine.
#[derive(Debug, Clone)]
pub struct HangulComposer {
    syllable: Syllable,
    /// Initial placed in front of a vowel typed without a consonant
    null_initial: u8,
    /// Apply the 2-set shift map (ㄱ -> ㄲ, ㅐ -> ㅒ, ...)
    shift_doubles: bool,
}

impl Default for HangulComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulComposer {
    /// Create an empty composer using ㅇ as the null-initial.
    pub fn new() -> Self {
        Self {
            syllable: Syllable::Empty,
            null_initial: jamo::NULL_INITIAL,
            shift_doubles: true,
        }
    }

    /// Create an empty composer from configuration.
    ///
    /// A null-initial that is not a choseong consonant falls back to ㅇ;
    /// [`HangulConfig::validate`] reports it.
    pub fn from_config(config: &HangulConfig) -> Self {
        Self {
            syllable: Syllable::Empty,
            null_initial: jamo::choseong_index(config.null_initial)
                .unwrap_or(jamo::NULL_INITIAL),
            shift_doubles: config.shift_doubles,
        }
    }

    /// The syllable under composition.
    pub fn syllable(&self) -> Syllable {
        self.syllable
    }

    pub fn initial(&self) -> Option<u8> {
        self.syllable.initial()
    }

    pub fn medial(&self) -> Option<u8> {
        self.syllable.medial()
    }

    pub fn final_consonant(&self) -> Option<u8> {
        self.syllable.final_consonant()
    }

    /// Check if a syllable is pending.
    pub fn is_composing(&self) -> bool {
        !self.syllable.is_empty()
    }

    /// Current composing text.
    pub fn preedit(&self) -> String {
        self.syllable.render()
    }

    /// Feed one key's code point. Returns true if it was a Hangul jamo and
    /// was consumed; anything else leaves the composer untouched.
    pub fn process<S: TextSurface + ?Sized>(&mut self, code: u32, surface: &mut S) -> bool {
        match char::from_u32(code) {
            Some(ch) => self.process_char(ch, surface),
            None => false,
        }
    }

    /// [`HangulComposer::process`] for a `char`.
    pub fn process_char<S: TextSurface + ?Sized>(&mut self, ch: char, surface: &mut S) -> bool {
        if let Some(jung) = jamo::jungseong_index(ch) {
            self.push_vowel(jung, surface);
        } else if let Some(cho) = jamo::choseong_index(ch) {
            self.push_consonant(ch, cho, surface);
        } else {
            trace!(?ch, "not a composable jamo");
            return false;
        }
        trace!(?ch, syllable = ?self.syllable, "composed");
        true
    }

    fn push_vowel<S: TextSurface + ?Sized>(&mut self, jung: u8, surface: &mut S) {
        let current = self.syllable;
        self.syllable = match current {
            Syllable::Empty => Syllable::Open {
                cho: self.null_initial,
                jung,
            },
            Syllable::Initial { cho } => Syllable::Open { cho, jung },
            Syllable::Open { cho, jung: medial } => match jamo::combine_jungseong(medial, jung) {
                Some(combined) => Syllable::Open { cho, jung: combined },
                None => {
                    commit(surface, current);
                    Syllable::Open {
                        cho: self.null_initial,
                        jung,
                    }
                }
            },
            Syllable::Closed {
                cho,
                jung: medial,
                jong,
            } => {
                // The final (or the tail of a cluster) moves to the next
                // syllable as its initial.
                let (kept, moved) = match jamo::split_jongseong(jong) {
                    Some((kept, ch)) => (kept, jamo::choseong_index(ch)),
                    None => (jamo::NO_JONGSEONG, jamo::jongseong_to_choseong(jong)),
                };
                commit(surface, Syllable::with_final(cho, medial, kept));
                Syllable::Open {
                    cho: moved.unwrap_or(self.null_initial),
                    jung,
                }
            }
        };
        self.show(surface);
    }

    fn push_consonant<S: TextSurface + ?Sized>(&mut self, ch: char, cho: u8, surface: &mut S) {
        let current = self.syllable;
        self.syllable = match current {
            Syllable::Empty => Syllable::Initial { cho },
            Syllable::Initial { .. } => {
                commit(surface, current);
                Syllable::Initial { cho }
            }
            Syllable::Open { cho: initial, jung } => match jamo::jongseong_index(ch) {
                Some(jong) => Syllable::Closed {
                    cho: initial,
                    jung,
                    jong,
                },
                None => {
                    commit(surface, current);
                    Syllable::Initial { cho }
                }
            },
            Syllable::Closed {
                cho: initial,
                jung,
                jong,
            } => match jamo::combine_jongseong(jong, ch) {
                Some(cluster) => Syllable::Closed {
                    cho: initial,
                    jung,
                    jong: cluster,
                },
                None => {
                    commit(surface, current);
                    Syllable::Initial { cho }
                }
            },
        };
        self.show(surface);
    }

    /// Remove the most specific layer of the pending syllable: final, then
    /// vowel, then initial. Returns false when nothing is pending.
    pub fn handle_backspace<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.syllable = match self.syllable {
            Syllable::Empty => return false,
            Syllable::Closed { cho, jung, jong } => Syllable::with_final(
                cho,
                jung,
                jamo::reduce_jongseong(jong).unwrap_or(jamo::NO_JONGSEONG),
            ),
            Syllable::Open { cho, jung } => match jamo::reduce_jungseong(jung) {
                Some(simpler) => Syllable::Open { cho, jung: simpler },
                None => Syllable::Initial { cho },
            },
            Syllable::Initial { .. } => Syllable::Empty,
        };
        trace!(syllable = ?self.syllable, "backspace");
        self.show(surface);
        true
    }

    /// Commit the pending syllable, if any, and become empty.
    pub fn commit_pending<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.syllable.is_empty() {
            return;
        }
        commit(surface, self.syllable);
        self.syllable = Syllable::Empty;
    }

    /// Drop the pending syllable. With a surface, its composing text is
    /// discarded as well; nothing is committed.
    pub fn reset(&mut self, surface: Option<&mut dyn TextSurface>) {
        self.syllable = Syllable::Empty;
        if let Some(surface) = surface {
            surface.set_composing_text("");
            surface.finish_composing_text();
        }
    }

    fn show<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_composing_text(&self.syllable.render());
    }
}

fn commit<S: TextSurface + ?Sized>(surface: &mut S, syllable: Syllable) {
    let text = syllable.render();
    debug!(%text, "commit syllable");
    surface.commit_text(&text);
}

impl Composer for HangulComposer {
    fn process(&mut self, code: u32, surface: &mut dyn TextSurface) -> bool {
        HangulComposer::process(self, code, surface)
    }

    fn handle_backspace(&mut self, surface: &mut dyn TextSurface) -> bool {
        HangulComposer::handle_backspace(self, surface)
    }

    fn commit_pending(&mut self, surface: &mut dyn TextSurface) {
        HangulComposer::commit_pending(self, surface)
    }

    fn reset(&mut self, surface: Option<&mut dyn TextSurface>) {
        HangulComposer::reset(self, surface)
    }

    fn is_composing(&self) -> bool {
        HangulComposer::is_composing(self)
    }

    fn shifted(&self, ch: char) -> char {
        if layout::is_layout_key(ch) {
            if self.shift_doubles {
                layout::shift_jamo(ch)
            } else {
                ch
            }
        } else {
            utils::shift_latin(ch)
        }
    }

    fn name(&self) -> &'static str {
        "hangul"
    }
}
