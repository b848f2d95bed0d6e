//! Hangul jamo tables.
//!
//! Indices follow the Unicode conjoining-jamo order used by the syllable
//! formula `U+AC00 + (cho * 21 + jung) * 28 + jong`:
//!
//! - choseong (19): ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
//! - jungseong (21): ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
//! - jongseong (28): none ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ
//!   ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
//!
//! Keys are compatibility jamo (U+3131..U+3163), the code points a keyboard
//! emits. Split and reduction tables are derived from the combination tables.

use std::collections::HashMap;

use libkorean_core::utils;
use once_cell::sync::Lazy;
use phf::phf_map;

/// First precomposed syllable (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const CHOSEONG_COUNT: u8 = 19;
pub const JUNGSEONG_COUNT: u8 = 21;
pub const JONGSEONG_COUNT: u8 = 28;

/// Jongseong index meaning "no final consonant".
pub const NO_JONGSEONG: u8 = 0;

/// Choseong index of ㅇ, the silent initial written before a vowel.
pub const NULL_INITIAL: u8 = 11;

/// Compatibility consonant -> choseong index.
static CHOSEONG: phf::Map<char, u8> = phf_map! {
    'ㄱ' => 0, 'ㄲ' => 1, 'ㄴ' => 2, 'ㄷ' => 3, 'ㄸ' => 4,
    'ㄹ' => 5, 'ㅁ' => 6, 'ㅂ' => 7, 'ㅃ' => 8, 'ㅅ' => 9,
    'ㅆ' => 10, 'ㅇ' => 11, 'ㅈ' => 12, 'ㅉ' => 13, 'ㅊ' => 14,
    'ㅋ' => 15, 'ㅌ' => 16, 'ㅍ' => 17, 'ㅎ' => 18,
};

/// Compatibility vowel -> jungseong index.
static JUNGSEONG: phf::Map<char, u8> = phf_map! {
    'ㅏ' => 0, 'ㅐ' => 1, 'ㅑ' => 2, 'ㅒ' => 3, 'ㅓ' => 4,
    'ㅔ' => 5, 'ㅕ' => 6, 'ㅖ' => 7, 'ㅗ' => 8, 'ㅘ' => 9,
    'ㅙ' => 10, 'ㅚ' => 11, 'ㅛ' => 12, 'ㅜ' => 13, 'ㅝ' => 14,
    'ㅞ' => 15, 'ㅟ' => 16, 'ㅠ' => 17, 'ㅡ' => 18, 'ㅢ' => 19,
    'ㅣ' => 20,
};

/// Compatibility consonant -> simple (single consonant) jongseong index.
/// ㄸ ㅃ ㅉ never close a syllable.
static JONGSEONG: phf::Map<char, u8> = phf_map! {
    'ㄱ' => 1, 'ㄲ' => 2, 'ㄴ' => 4, 'ㄷ' => 7, 'ㄹ' => 8,
    'ㅁ' => 16, 'ㅂ' => 17, 'ㅅ' => 19, 'ㅆ' => 20, 'ㅇ' => 21,
    'ㅈ' => 22, 'ㅊ' => 23, 'ㅋ' => 24, 'ㅌ' => 25, 'ㅍ' => 26,
    'ㅎ' => 27,
};

const CHOSEONG_JAMO: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const JONGSEONG_JAMO: [Option<char>; JONGSEONG_COUNT as usize] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// (final, following consonant, cluster final)
const JONGSEONG_CLUSTERS: [(u8, char, u8); 11] = [
    (1, 'ㅅ', 3),   // ㄱ + ㅅ = ㄳ
    (4, 'ㅈ', 5),   // ㄴ + ㅈ = ㄵ
    (4, 'ㅎ', 6),   // ㄴ + ㅎ = ㄶ
    (8, 'ㄱ', 9),   // ㄹ + ㄱ = ㄺ
    (8, 'ㅁ', 10),  // ㄹ + ㅁ = ㄻ
    (8, 'ㅂ', 11),  // ㄹ + ㅂ = ㄼ
    (8, 'ㅅ', 12),  // ㄹ + ㅅ = ㄽ
    (8, 'ㅌ', 13),  // ㄹ + ㅌ = ㄾ
    (8, 'ㅍ', 14),  // ㄹ + ㅍ = ㄿ
    (8, 'ㅎ', 15),  // ㄹ + ㅎ = ㅀ
    (17, 'ㅅ', 18), // ㅂ + ㅅ = ㅄ
];

/// (medial, following vowel, diphthong)
const JUNGSEONG_DIPHTHONGS: [(u8, u8, u8); 7] = [
    (8, 0, 9),    // ㅗ + ㅏ = ㅘ
    (8, 1, 10),   // ㅗ + ㅐ = ㅙ
    (8, 20, 11),  // ㅗ + ㅣ = ㅚ
    (13, 4, 14),  // ㅜ + ㅓ = ㅝ
    (13, 5, 15),  // ㅜ + ㅔ = ㅞ
    (13, 20, 16), // ㅜ + ㅣ = ㅟ
    (18, 20, 19), // ㅡ + ㅣ = ㅢ
];

static JONGSEONG_COMBINE: Lazy<HashMap<(u8, char), u8>> = Lazy::new(|| {
    JONGSEONG_CLUSTERS
        .iter()
        .map(|&(jong, ch, cluster)| ((jong, ch), cluster))
        .collect()
});

static JONGSEONG_SPLIT: Lazy<HashMap<u8, (u8, char)>> = Lazy::new(|| {
    JONGSEONG_CLUSTERS
        .iter()
        .map(|&(jong, ch, cluster)| (cluster, (jong, ch)))
        .collect()
});

static JONGSEONG_TO_CHOSEONG: Lazy<HashMap<u8, u8>> = Lazy::new(|| {
    JONGSEONG
        .entries()
        .filter_map(|(ch, &jong)| CHOSEONG.get(ch).map(|&cho| (jong, cho)))
        .collect()
});

static JUNGSEONG_COMBINE: Lazy<HashMap<(u8, u8), u8>> = Lazy::new(|| {
    JUNGSEONG_DIPHTHONGS
        .iter()
        .map(|&(first, second, combined)| ((first, second), combined))
        .collect()
});

static JUNGSEONG_REDUCE: Lazy<HashMap<u8, u8>> = Lazy::new(|| {
    JUNGSEONG_DIPHTHONGS
        .iter()
        .map(|&(first, _, combined)| (combined, first))
        .collect()
});

/// Choseong index of a compatibility consonant.
pub fn choseong_index(ch: char) -> Option<u8> {
    CHOSEONG.get(&ch).copied()
}

/// Jungseong index of a compatibility vowel.
pub fn jungseong_index(ch: char) -> Option<u8> {
    JUNGSEONG.get(&ch).copied()
}

/// Simple jongseong index of a compatibility consonant.
pub fn jongseong_index(ch: char) -> Option<u8> {
    JONGSEONG.get(&ch).copied()
}

/// Cluster formed by appending consonant `ch` to final `jong` (ㄱ + ㅅ = ㄳ).
pub fn combine_jongseong(jong: u8, ch: char) -> Option<u8> {
    JONGSEONG_COMBINE.get(&(jong, ch)).copied()
}

/// Split a cluster final into the final that stays and the consonant that
/// moves on to the next syllable (ㄳ -> ㄱ, ㅅ). `None` for simple finals.
pub fn split_jongseong(jong: u8) -> Option<(u8, char)> {
    JONGSEONG_SPLIT.get(&jong).copied()
}

/// Choseong index for a simple final moving to the next syllable.
/// `None` for clusters (use [`split_jongseong`]) and for "no final".
pub fn jongseong_to_choseong(jong: u8) -> Option<u8> {
    JONGSEONG_TO_CHOSEONG.get(&jong).copied()
}

/// Diphthong formed by `first` followed by `second` (ㅗ + ㅏ = ㅘ).
pub fn combine_jungseong(first: u8, second: u8) -> Option<u8> {
    JUNGSEONG_COMBINE.get(&(first, second)).copied()
}

/// One step simpler final: cluster -> its first consonant. `None` for simple
/// finals, which reduce to no final at all.
pub fn reduce_jongseong(jong: u8) -> Option<u8> {
    split_jongseong(jong).map(|(kept, _)| kept)
}

/// One step simpler medial: diphthong -> its first vowel. `None` for
/// monophthongs.
pub fn reduce_jungseong(jung: u8) -> Option<u8> {
    JUNGSEONG_REDUCE.get(&jung).copied()
}

/// Compatibility jamo for a choseong index.
pub fn choseong_to_jamo(cho: u8) -> Option<char> {
    CHOSEONG_JAMO.get(usize::from(cho)).copied()
}

/// Compatibility jamo for a jungseong index (vowels are contiguous from ㅏ).
pub fn jungseong_to_jamo(jung: u8) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(0x314F + u32::from(jung))
    } else {
        None
    }
}

/// Compatibility jamo for a jongseong index; `None` for "no final".
pub fn jongseong_to_jamo(jong: u8) -> Option<char> {
    JONGSEONG_JAMO.get(usize::from(jong)).copied().flatten()
}

/// Precomposed syllable for the given indices.
pub fn compose_syllable(cho: u8, jung: u8, jong: u8) -> Option<char> {
    if cho >= CHOSEONG_COUNT || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return None;
    }
    let code = SYLLABLE_BASE
        + (u32::from(cho) * u32::from(JUNGSEONG_COUNT) + u32::from(jung))
            * u32::from(JONGSEONG_COUNT)
        + u32::from(jong);
    char::from_u32(code)
}

/// Indices (choseong, jungseong, jongseong) of a precomposed syllable.
pub fn decompose_syllable(ch: char) -> Option<(u8, u8, u8)> {
    if !is_hangul_syllable(ch) {
        return None;
    }
    let offset = u32::from(ch) - SYLLABLE_BASE;
    let jong = offset % u32::from(JONGSEONG_COUNT);
    let jung = (offset / u32::from(JONGSEONG_COUNT)) % u32::from(JUNGSEONG_COUNT);
    let cho = offset / (u32::from(JUNGSEONG_COUNT) * u32::from(JONGSEONG_COUNT));
    // All three fit in u8: cho < 19, jung < 21, jong < 28.
    Some((cho as u8, jung as u8, jong as u8))
}

/// NFC-normalize `text` (conjoining jamo compose into syllables, outer
/// whitespace trimmed) and pair each char with its syllable indices.
pub fn decompose_text(text: &str) -> Vec<(char, Option<(u8, u8, u8)>)> {
    utils::normalize(text)
        .chars()
        .map(|ch| (ch, decompose_syllable(ch)))
        .collect()
}

/// Check if `ch` is a precomposed syllable (가..힣).
pub fn is_hangul_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&u32::from(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choseong_table_matches_jamo_order() {
        for (idx, &jamo) in CHOSEONG_JAMO.iter().enumerate() {
            assert_eq!(choseong_index(jamo), Some(idx as u8), "{}", jamo);
        }
        assert_eq!(choseong_index('ㄳ'), None);
        assert_eq!(choseong_index('ㅏ'), None);
        assert_eq!(choseong_index('a'), None);
    }

    #[test]
    fn test_jungseong_contiguous() {
        for jung in 0..JUNGSEONG_COUNT {
            let jamo = jungseong_to_jamo(jung).unwrap();
            assert_eq!(jungseong_index(jamo), Some(jung));
        }
        assert_eq!(jungseong_to_jamo(21), None);
        assert_eq!(jungseong_index('ㄱ'), None);
    }

    #[test]
    fn test_simple_jongseong() {
        assert_eq!(jongseong_index('ㄱ'), Some(1));
        assert_eq!(jongseong_index('ㄴ'), Some(4));
        assert_eq!(jongseong_index('ㅎ'), Some(27));
        assert_eq!(jongseong_index('ㄸ'), None);
        assert_eq!(jongseong_index('ㅃ'), None);
        assert_eq!(jongseong_index('ㅉ'), None);

        for (&ch, &jong) in JONGSEONG.entries() {
            assert_eq!(jongseong_to_jamo(jong), Some(ch));
        }
    }

    #[test]
    fn test_compose_syllable() {
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(0, 18, 8), Some('글'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));
        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('a'), None);
    }

    #[test]
    fn test_decompose_text_normalizes_conjoining_jamo() {
        // ᄒ ᅡ ᆫ + 글 + space
        let blocks = decompose_text(" \u{1112}\u{1161}\u{11AB}글 ");
        assert_eq!(
            blocks,
            vec![('한', Some((18, 0, 4))), ('글', Some((0, 18, 8)))]
        );
        assert_eq!(decompose_text("a"), vec![('a', None)]);
    }

    #[test]
    fn test_combine_jongseong() {
        assert_eq!(combine_jongseong(1, 'ㅅ'), Some(3));
        assert_eq!(combine_jongseong(4, 'ㅈ'), Some(5));
        assert_eq!(combine_jongseong(8, 'ㄱ'), Some(9));
        assert_eq!(combine_jongseong(8, 'ㅎ'), Some(15));
        assert_eq!(combine_jongseong(17, 'ㅅ'), Some(18));
        assert_eq!(combine_jongseong(1, 'ㄱ'), None);
        assert_eq!(combine_jongseong(4, 'ㄱ'), None);
    }

    #[test]
    fn test_split_inverts_combine() {
        for &(jong, ch, cluster) in JONGSEONG_CLUSTERS.iter() {
            assert_eq!(split_jongseong(cluster), Some((jong, ch)));
            assert_eq!(reduce_jongseong(cluster), Some(jong));
            assert_eq!(jongseong_to_choseong(cluster), None);
        }
        assert_eq!(split_jongseong(1), None);
        assert_eq!(reduce_jongseong(4), None);
    }

    #[test]
    fn test_jongseong_to_choseong() {
        assert_eq!(jongseong_to_choseong(1), Some(0)); // ㄱ
        assert_eq!(jongseong_to_choseong(4), Some(2)); // ㄴ
        assert_eq!(jongseong_to_choseong(8), Some(5)); // ㄹ
        assert_eq!(jongseong_to_choseong(21), Some(11)); // ㅇ
        assert_eq!(jongseong_to_choseong(27), Some(18)); // ㅎ
        assert_eq!(jongseong_to_choseong(NO_JONGSEONG), None);
        assert_eq!(JONGSEONG_TO_CHOSEONG.len(), 16);
    }

    #[test]
    fn test_combine_and_reduce_jungseong() {
        assert_eq!(combine_jungseong(8, 0), Some(9)); // ㅗ + ㅏ = ㅘ
        assert_eq!(combine_jungseong(8, 20), Some(11)); // ㅗ + ㅣ = ㅚ
        assert_eq!(combine_jungseong(18, 20), Some(19)); // ㅡ + ㅣ = ㅢ
        assert_eq!(combine_jungseong(0, 0), None);
        assert_eq!(combine_jungseong(9, 20), None); // ㅘ does not extend

        assert_eq!(reduce_jungseong(9), Some(8));
        assert_eq!(reduce_jungseong(16), Some(13));
        assert_eq!(reduce_jungseong(0), None);
    }

    #[test]
    fn test_null_initial_is_ieung() {
        assert_eq!(choseong_to_jamo(NULL_INITIAL), Some('ㅇ'));
        assert_eq!(choseong_to_jamo(CHOSEONG_COUNT), None);
    }
}
