//! Behavioural tests for `HangulComposer` against a recording surface.

use libhangul::jamo;
use libhangul::{HangulComposer, RecordingSurface, SurfaceCall, Syllable};
use unicode_normalization::UnicodeNormalization;

fn type_keys(composer: &mut HangulComposer, surface: &mut RecordingSurface, keys: &str) {
    for ch in keys.chars() {
        assert!(composer.process_char(ch, surface), "{} rejected", ch);
    }
}

/// Compose a block from conjoining jamo and let NFC produce the syllable.
fn nfc_block(cho: u8, jung: u8, jong: u8) -> String {
    let mut decomposed = String::new();
    decomposed.push(char::from_u32(0x1100 + u32::from(cho)).unwrap());
    decomposed.push(char::from_u32(0x1161 + u32::from(jung)).unwrap());
    if jong != 0 {
        decomposed.push(char::from_u32(0x11A7 + u32::from(jong)).unwrap());
    }
    decomposed.nfc().collect()
}

#[test]
fn lone_vowels_get_placeholder_initial() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();

    type_keys(&mut composer, &mut surface, "ㅏ");
    assert_eq!(surface.composing(), "아");

    type_keys(&mut composer, &mut surface, "ㅓ");
    assert_eq!(surface.committed(), "아");
    assert_eq!(surface.composing(), "어");
}

#[test]
fn cluster_final_splits_into_next_block() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();

    type_keys(&mut composer, &mut surface, "ㅎㅏㄴ");
    assert_eq!(surface.composing(), "한");
    type_keys(&mut composer, &mut surface, "ㅈ");
    assert_eq!(surface.composing(), "핝");
    type_keys(&mut composer, &mut surface, "ㅏ");
    assert_eq!(surface.committed(), "한");
    assert_eq!(surface.composing(), "자");
    assert_eq!(surface.visible_text(), "한자");
}

#[test]
fn giyeok_siot_cluster_splits() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();

    type_keys(&mut composer, &mut surface, "ㄱㅏㄱㅅ");
    assert_eq!(surface.composing(), "갃");
    type_keys(&mut composer, &mut surface, "ㅏ");
    assert_eq!(surface.committed(), "각");
    assert_eq!(surface.composing(), "사");
}

#[test]
fn backspace_on_empty_is_not_consumed() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    assert!(!composer.handle_backspace(&mut surface));
    assert!(surface.calls().is_empty());
}

#[test]
fn backspace_empties_simple_block_within_three_calls() {
    for keys in ["ㄱ", "ㄱㅏ", "ㄱㅏㄴ", "ㅏ"] {
        let mut composer = HangulComposer::new();
        let mut surface = RecordingSurface::new();
        type_keys(&mut composer, &mut surface, keys);

        let mut calls = 0;
        while composer.handle_backspace(&mut surface) {
            calls += 1;
        }
        assert!(calls <= 3, "{} took {} backspaces", keys, calls);
        assert_eq!(surface.composing(), "");
        assert_eq!(surface.commit_count(), 0);
    }
}

#[test]
fn backspace_empties_cluster_diphthong_block_within_five_calls() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    type_keys(&mut composer, &mut surface, "ㄱㅜㅔㄹㅁ");
    assert_eq!(surface.composing(), "궮");

    let mut calls = 0;
    while composer.handle_backspace(&mut surface) {
        calls += 1;
    }
    assert_eq!(calls, 5);
    assert!(!composer.is_composing());
}

#[test]
fn backspace_on_lone_vowel_shows_placeholder() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    type_keys(&mut composer, &mut surface, "ㅏ");

    assert!(composer.handle_backspace(&mut surface));
    assert_eq!(surface.composing(), "ㅇ");
}

#[test]
fn vowel_pairs_form_diphthongs() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    type_keys(&mut composer, &mut surface, "ㅗㅏ");
    assert_eq!(surface.composing(), "와");
    composer.commit_pending(&mut surface);

    type_keys(&mut composer, &mut surface, "ㅗㅣ");
    assert_eq!(surface.composing(), "외");
    composer.commit_pending(&mut surface);

    // ㅏ + ㅗ has no diphthong: the first block commits
    type_keys(&mut composer, &mut surface, "ㅏㅗ");
    assert_eq!(surface.committed(), "와외아");
    assert_eq!(surface.composing(), "오");
}

#[test]
fn non_hangul_input_leaves_state_alone() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    type_keys(&mut composer, &mut surface, "ㅎㅏㄴ");
    let before = composer.syllable();
    surface.clear_calls();

    assert!(!composer.process('a' as u32, &mut surface));
    assert_eq!(composer.syllable(), before);
    assert!(surface.calls().is_empty());
}

#[test]
fn commit_pending_emits_one_commit() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    type_keys(&mut composer, &mut surface, "ㄱㅘ");
    surface.clear_calls();

    composer.commit_pending(&mut surface);
    assert_eq!(composer.syllable(), Syllable::Empty);
    assert_eq!(surface.calls(), &[SurfaceCall::Commit("과".to_string())]);

    composer.commit_pending(&mut surface);
    assert_eq!(surface.commit_count(), 1);
}

#[test]
fn rendering_matches_unicode_composition() {
    for cho in 0..jamo::CHOSEONG_COUNT {
        for jung in 0..jamo::JUNGSEONG_COUNT {
            for jong in [0, 1, 4, 9, 15, 27] {
                let rendered = Syllable::with_final(cho, jung, jong).render();
                assert_eq!(rendered, nfc_block(cho, jung, jong), "{} {} {}", cho, jung, jong);
            }
        }
    }
}

#[test]
fn typed_blocks_round_trip_through_decomposition() {
    let mut composer = HangulComposer::new();
    let mut surface = RecordingSurface::new();
    type_keys(&mut composer, &mut surface, "ㄷㅏㄹㄱㅇㅡㅣ");
    composer.commit_pending(&mut surface);
    assert_eq!(surface.committed(), "닭의");

    let blocks: Vec<_> = surface
        .committed()
        .chars()
        .filter_map(jamo::decompose_syllable)
        .collect();
    assert_eq!(blocks, vec![(3, 0, 9), (11, 19, 0)]);
}
