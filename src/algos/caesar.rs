use std::collections::HashMap;

use log::debug;

use crate::constants::{ALPHABET_CHARS, PUNCTUATION_CHARS, SPACE_PLACEHOLDER};
use crate::structs::CharacterMap;
use crate::utils::{normalize_shift, rotate_left};

/// Builds the forward (encryption) map and its exact inverse.
///
/// Letters rotate modulo 26. Punctuation, when enabled, rotates by the
/// already reduced shift modulo the punctuation set length, so the two
/// rotations are not aligned. Space, when enabled, maps to
/// [`SPACE_PLACEHOLDER`].
///
/// # Panics
///
/// Panics if the forward map is not injective. The fixed character sets and
/// the placeholder make that unreachable.
pub fn build_maps(
    shift: i64,
    encode_punct: bool,
    encode_space: bool,
) -> (CharacterMap, CharacterMap) {
    let shift = normalize_shift(shift, ALPHABET_CHARS.len());
    let mut forward: HashMap<char, char> = ALPHABET_CHARS
        .iter()
        .copied()
        .zip(rotate_left(&ALPHABET_CHARS, shift))
        .collect();

    if encode_punct {
        let punct_shift = shift % PUNCTUATION_CHARS.len();
        forward.extend(
            PUNCTUATION_CHARS
                .iter()
                .copied()
                .zip(rotate_left(&PUNCTUATION_CHARS, punct_shift)),
        );
    }

    if encode_space {
        forward.insert(' ', SPACE_PLACEHOLDER);
    }

    let forward: CharacterMap = forward.into_iter().collect();
    let inverse = forward.invert();

    assert_eq!(
        forward.len(),
        inverse.len(),
        "cipher map collision: shift={shift}, punct={encode_punct}, space={encode_space}"
    );

    debug!(
        "built cipher maps: shift={}, punct={}, space={}, entries={}",
        shift,
        encode_punct,
        encode_space,
        forward.len()
    );

    (forward, inverse)
}

/// Looks `ch` up by its lowercase form.
pub fn lookup_normalized(ch: char, mapping: &CharacterMap) -> Option<char> {
    let mut lower = ch.to_lowercase();

    match (lower.next(), lower.next()) {
        (Some(base), None) => mapping.get(base),
        _ => None,
    }
}

/// Gives `mapped` the case of `original`.
pub fn reapply_case(mapped: char, original: char) -> char {
    if !original.is_uppercase() {
        return mapped;
    }

    let mut upper = mapped.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => mapped,
    }
}

/// Substitutes every mapped character of `text`, one output char per input char.
pub fn transform(text: &str, mapping: &CharacterMap) -> String {
    text.chars()
        .map(|ch| match lookup_normalized(ch, mapping) {
            Some(mapped) => reapply_case(mapped, ch),
            None => ch,
        })
        .collect()
}
