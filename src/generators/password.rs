// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::words::WordList;
use super::{strength, GeneratorError, Result};
use crate::models::{CharacterClassConfig, GeneratedPassword, StrengthResult};

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+";

pub const WORD_DELIMITER: char = '-';

pub struct PasswordGenerator {
    words: WordList,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            words: WordList::builtin(),
        }
    }

    pub fn with_words(words: WordList) -> Self {
        PasswordGenerator { words }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn generate_password(
        &self,
        length: usize,
        config: &CharacterClassConfig,
    ) -> Result<GeneratedPassword> {
        self.generate_password_with_rng(length, config, &mut rand::thread_rng())
    }

    /// Builds a password from `config`, drawing every random choice from `rng`.
    ///
    /// Word mode reserves one delimiter slot per word, including the first, and
    /// stops at the first word that does not fit. Whatever is left of `length`
    /// is filled from the enabled alphabet, so the result never exceeds `length`.
    pub fn generate_password_with_rng<R: Rng + ?Sized>(
        &self,
        length: usize,
        config: &CharacterClassConfig,
        rng: &mut R,
    ) -> Result<GeneratedPassword> {
        if length == 0 {
            return Err(GeneratorError::InvalidLength(length));
        }

        let mut password = String::with_capacity(length);

        if config.easy_to_remember {
            while password.len() < length {
                let word = self.words.sample(rng);
                if password.len() + word.len() + 1 > length {
                    break;
                }
                if !password.is_empty() {
                    password.push(WORD_DELIMITER);
                }
                password.push_str(word);
            }
            log::debug!("Word prefix uses {} of {} characters", password.len(), length);
        }

        let remaining = length - password.len();
        let chars = alphabet(config);
        let dist = Uniform::from(0..chars.len());
        log::trace!("Filling {} characters from an alphabet of {}", remaining, chars.len());

        password.extend((0..remaining).map(|_| chars[dist.sample(rng)] as char));

        if config.mixes_case() {
            password = password
                .chars()
                .map(|c| {
                    if rng.gen_bool(0.5) {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect();
        }

        Ok(GeneratedPassword::new(password))
    }

    pub fn analyze_password_strength(&self, password: &str, easy_to_remember: bool) -> StrengthResult {
        strength::evaluate(password, easy_to_remember)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate characters for the enabled classes, in fixed order.
/// Falls back to lowercase when nothing is enabled.
pub fn alphabet(config: &CharacterClassConfig) -> Vec<u8> {
    let mut chars = Vec::new();

    if config.upper_case {
        chars.extend_from_slice(UPPERCASE);
    }
    if config.lower_case {
        chars.extend_from_slice(LOWERCASE);
    }
    if config.numbers {
        chars.extend_from_slice(NUMBERS);
    }
    if config.symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    if chars.is_empty() {
        chars.extend_from_slice(LOWERCASE);
    }

    chars
}

/// Builds a password with the built-in word list and the thread-local RNG.
pub fn build(length: usize, config: &CharacterClassConfig) -> Result<GeneratedPassword> {
    PasswordGenerator::new().generate_password(length, config)
}

pub fn build_with_rng<R: Rng + ?Sized>(
    length: usize,
    config: &CharacterClassConfig,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    PasswordGenerator::new().generate_password_with_rng(length, config, rng)
}
