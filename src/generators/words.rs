// src/generators/words.rs
use std::fs;
use std::path::Path;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{GeneratorError, Result};

pub const MAX_WORD_LEN: usize = 12;

const BUILTIN_WORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "melon", "berry", "kiwi", "lemon",
    "lime", "main", "brick", "seed", "type", "earn", "trick", "each", "when",
    "purple", "mango", "peach", "pear", "plum", "cherry", "avocado", "fig",
    "date", "coconut", "papaya", "twitter", "diamond", "treasure", "greedy",
    "environment", "saturn", "kepler", "white", "optimist", "college", "larry",
    "candy", "strong", "firefighter", "crayon", "cardboard", "putin", "korea",
    "parrot", "deer", "heart", "megabolt", "megavolt", "goliath", "giant",
    "picture", "spanish", "edge",
];

/// Ordered, read-only set of lowercase tokens sampled in easy-to-remember mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn builtin() -> Self {
        WordList {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parses one word per line. Blank lines and `#` comments are skipped.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut words = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !is_valid_word(word) {
                return Err(GeneratorError::InvalidWord {
                    line: idx + 1,
                    word: word.to_string(),
                });
            }
            words.push(word.to_string());
        }

        if words.is_empty() {
            return Err(GeneratorError::EmptyWordList);
        }

        log::debug!("Parsed word list with {} words", words.len());
        Ok(WordList { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading word list from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_text(&content)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Length of the shortest word.
    pub fn shortest(&self) -> usize {
        self.words.iter().map(|w| w.len()).min().unwrap_or(0)
    }

    /// Picks a word uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction
        self.words.choose(rng).map(String::as_str).unwrap_or("")
    }
}

fn is_valid_word(word: &str) -> bool {
    (1..=MAX_WORD_LEN).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_words_are_valid() {
        let list = WordList::builtin();
        assert_eq!(list.len(), 56);
        assert!(!list.is_empty());
        assert!(list.words().iter().all(|w| is_valid_word(w)));
        assert_eq!(list.shortest(), 3);
    }

    #[test]
    fn parses_text_skipping_comments_and_blanks() {
        let list = WordList::from_text("# fruit\napple\n\n  pear  \n").unwrap();
        assert_eq!(list.words(), &["apple".to_string(), "pear".to_string()]);
    }

    #[test]
    fn rejects_uppercase_and_long_words() {
        match WordList::from_text("apple\nPear\n") {
            Err(GeneratorError::InvalidWord { line, word }) => {
                assert_eq!(line, 2);
                assert_eq!(word, "Pear");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(WordList::from_text("abcdefghijklm").is_err());
        assert!(WordList::from_text("two words").is_err());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            WordList::from_text("\n# nothing\n"),
            Err(GeneratorError::EmptyWordList)
        ));
    }

    #[test]
    fn sample_returns_member() {
        let list = WordList::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = list.sample(&mut rng);
            assert!(list.words().iter().any(|w| w == word));
        }
    }
}
