// src/lib.rs
//! Password generation with character-class options, an optional word-based
//! "easy to remember" mode and a four-step strength rating.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::generators::{build, build_with_rng, evaluate, GeneratorError, PasswordGenerator, WordList};
pub use crate::models::{CharacterClassConfig, GeneratedPassword, StrengthLabel, StrengthResult};
