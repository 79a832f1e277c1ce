// src/models.rs
use std::fmt;
use serde::Serialize;

// Character classes enabled for password generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassConfig {
    pub upper_case: bool,
    pub lower_case: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub easy_to_remember: bool,
}

impl CharacterClassConfig {
    /// True when no character class is enabled (word mode is not a class).
    pub fn no_class_enabled(&self) -> bool {
        !self.upper_case && !self.lower_case && !self.numbers && !self.symbols
    }

    /// Both letter cases on, which triggers the re-casing pass.
    pub fn mixes_case(&self) -> bool {
        self.upper_case && self.lower_case
    }
}

impl Default for CharacterClassConfig {
    fn default() -> Self {
        Self {
            upper_case: false,
            lower_case: true,
            numbers: false,
            symbols: false,
            easy_to_remember: false,
        }
    }
}

/// A password produced by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        GeneratedPassword(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Maps a score to its label. Anything outside 1..=3 reads as strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "WEAK"),
            StrengthLabel::Fair => write!(f, "FAIR"),
            StrengthLabel::Good => write!(f, "GOOD"),
            StrengthLabel::Strong => write!(f, "STRONG"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    pub const MIN_SCORE: u8 = 1;
    pub const MAX_SCORE: u8 = 4;

    /// Clamps a raw score into range and derives the label from it.
    pub fn from_raw(raw: i32) -> Self {
        let score = raw.clamp(Self::MIN_SCORE as i32, Self::MAX_SCORE as i32) as u8;
        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }
}
