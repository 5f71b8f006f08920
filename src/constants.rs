/// Lowercase Latin alphabet, in rotation order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII punctuation, in rotation order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Substituted for `' '` when space encoding is on.
///
/// Must stay outside both `ALPHABET` and `PUNCTUATION`, and nothing else may
/// map to it, otherwise the inverse map loses an entry.
pub const SPACE_PLACEHOLDER: char = '\u{2581}';

pub const DEFAULT_SHIFT: u8 = 3;
pub const MAX_SHIFT: u8 = 25;

lazy_static! {
    pub static ref ALPHABET_CHARS: Vec<char> = ALPHABET.chars().collect();
    pub static ref PUNCTUATION_CHARS: Vec<char> = PUNCTUATION.chars().collect();
}
