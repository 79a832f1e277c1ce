// src/generators/mod.rs
use std::io;
use thiserror::Error;

pub mod password;
pub mod strength;
pub mod words;

pub use password::{build, build_with_rng, PasswordGenerator};
pub use strength::evaluate;
pub use words::WordList;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("Word list contains no words")]
    EmptyWordList,

    #[error("Invalid word {word:?} on line {line}: expected 1-12 lowercase ASCII letters")]
    InvalidWord { line: usize, word: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
