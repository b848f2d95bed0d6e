//! Dubeolsik (2-set) keyboard layout.
//!
//! Key labels of the standard Korean layout, its shift layer, and the
//! mapping from QWERTY positions used by the CLI's `--qwerty` input.

use once_cell::sync::Lazy;
use phf::phf_map;
use std::collections::HashMap;

/// Letter rows of the 2-set layout, top to bottom.
pub const DUBEOLSIK_ROWS: [&[char]; 3] = [
    &['ㅂ', 'ㅈ', 'ㄷ', 'ㄱ', 'ㅅ', 'ㅛ', 'ㅕ', 'ㅑ', 'ㅐ', 'ㅔ'],
    &['ㅁ', 'ㄴ', 'ㅇ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅓ', 'ㅏ', 'ㅣ'],
    &['ㅋ', 'ㅌ', 'ㅊ', 'ㅍ', 'ㅠ', 'ㅜ', 'ㅡ'],
];

/// QWERTY keys at the same positions as [`DUBEOLSIK_ROWS`].
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Shift layer: keys not listed here keep their label.
static SHIFT_MAP: phf::Map<char, char> = phf_map! {
    'ㅂ' => 'ㅃ',
    'ㅈ' => 'ㅉ',
    'ㄷ' => 'ㄸ',
    'ㄱ' => 'ㄲ',
    'ㅅ' => 'ㅆ',
    'ㅐ' => 'ㅒ',
    'ㅔ' => 'ㅖ',
};

static QWERTY_TO_JAMO: Lazy<HashMap<char, char>> = Lazy::new(|| {
    QWERTY_ROWS
        .iter()
        .zip(DUBEOLSIK_ROWS.iter())
        .flat_map(|(latin, jamo)| latin.chars().zip(jamo.iter().copied()))
        .collect()
});

/// Shifted label of a layout key (ㄱ -> ㄲ).
pub fn shift_jamo(ch: char) -> char {
    SHIFT_MAP.get(&ch).copied().unwrap_or(ch)
}

/// Check if `ch` is a key label of the 2-set layout, shifted or not.
pub fn is_layout_key(ch: char) -> bool {
    DUBEOLSIK_ROWS.iter().any(|row| row.contains(&ch))
        || SHIFT_MAP.values().any(|&shifted| shifted == ch)
}

/// Jamo typed by a QWERTY key on the 2-set layout.
///
/// Uppercase letters act as shifted keys: `R` gives ㄲ, `K` gives ㅏ.
pub fn latin_to_jamo(ch: char) -> Option<char> {
    if ch.is_ascii_uppercase() {
        let base = QWERTY_TO_JAMO.get(&ch.to_ascii_lowercase())?;
        Some(shift_jamo(*base))
    } else {
        QWERTY_TO_JAMO.get(&ch).copied()
    }
}

/// Translate QWERTY text to jamo, leaving keys outside the layout as is.
pub fn transliterate(input: &str) -> String {
    input
        .chars()
        .map(|ch| latin_to_jamo(ch).unwrap_or(ch))
        .collect()
}
