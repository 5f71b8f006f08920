use crate::algos::caesar::{build_maps, transform};
use crate::constants::ALPHABET_CHARS;
use crate::structs::{CaesarCipher, CharacterMap, Mode};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::normalize_shift;

impl CaesarCipher {
    pub fn new(shift: i64, encode_punct: bool, encode_space: bool) -> Self {
        let (forward, inverse) = build_maps(shift, encode_punct, encode_space);

        CaesarCipher {
            shift: normalize_shift(shift, ALPHABET_CHARS.len()),
            forward,
            inverse,
        }
    }

    pub fn mapping(&self, mode: Mode) -> &CharacterMap {
        match mode {
            Mode::Encrypt => &self.forward,
            Mode::Decrypt => &self.inverse,
        }
    }

    pub fn apply(&self, mode: Mode, message: &str) -> String {
        transform(message, self.mapping(mode))
    }
}

impl Encryptor for CaesarCipher {
    fn encrypt(&self, message: &str) -> String {
        self.apply(Mode::Encrypt, message)
    }
}

impl Decryptor for CaesarCipher {
    fn decrypt(&self, message: &str) -> String {
        self.apply(Mode::Decrypt, message)
    }
}
