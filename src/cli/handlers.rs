// src/cli/handlers.rs
use serde::Serialize;
use thiserror::Error;

use crate::core::Config;
use crate::generators::{evaluate, GeneratorError, PasswordGenerator};
use crate::models::{CharacterClassConfig, GeneratedPassword, StrengthResult};
use crate::utils::{format_strength_meter, mask_password};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("'{0}' is not a valid length")]
    InvalidNumber(String),

    #[error("Count must be at least 1")]
    InvalidCount,

    #[error("Generation failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// A password together with its rating, as printed by the front end.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub password: GeneratedPassword,
    #[serde(flatten)]
    pub strength: StrengthResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassFlags {
    pub upper: bool,
    pub no_lower: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub easy: bool,
}

// Flags only switch classes on; `no_lower` is the one way to drop lowercase
pub fn resolve_classes(defaults: &CharacterClassConfig, flags: ClassFlags) -> CharacterClassConfig {
    CharacterClassConfig {
        upper_case: defaults.upper_case || flags.upper,
        lower_case: defaults.lower_case && !flags.no_lower,
        numbers: defaults.numbers || flags.numbers,
        symbols: defaults.symbols || flags.symbols,
        easy_to_remember: defaults.easy_to_remember || flags.easy,
    }
}

pub fn check_length(config: &Config, length: usize) -> Result<()> {
    if config.length_in_range(length) {
        Ok(())
    } else {
        Err(CliError::LengthOutOfRange {
            length,
            min: config.min_length,
            max: config.max_length,
        })
    }
}

/// Parses a typed length and checks it against the configured bounds.
pub fn parse_length(config: &Config, input: &str) -> Result<usize> {
    let input = input.trim();
    let length = input
        .parse()
        .map_err(|_| CliError::InvalidNumber(input.to_string()))?;
    check_length(config, length)?;
    Ok(length)
}

pub fn handle_generate(
    generator: &PasswordGenerator,
    config: &Config,
    length: Option<usize>,
    classes: &CharacterClassConfig,
    count: usize,
) -> Result<Vec<GenerationOutcome>> {
    let length = length.unwrap_or(config.default_length);
    check_length(config, length)?;
    if count == 0 {
        return Err(CliError::InvalidCount);
    }

    log::info!("Generating {} password(s) of length {} with {:?}", count, length, classes);

    let mut outcomes = Vec::with_capacity(count);
    for _ in 0..count {
        let password = generator.generate_password(length, classes)?;
        let strength = generator.analyze_password_strength(password.as_str(), classes.easy_to_remember);
        log::debug!("Generated {} rated {}", mask_password(password.as_str()), strength.label);
        outcomes.push(GenerationOutcome { password, strength });
    }

    Ok(outcomes)
}

pub fn handle_evaluate(password: &str, easy: bool) -> StrengthResult {
    let result = evaluate(password, easy);
    log::info!("Evaluated {} as {}", mask_password(password), result.label);
    result
}

pub fn render_outcome(outcome: &GenerationOutcome, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(outcome)?)
    } else {
        Ok(format!("{}  {}", outcome.password, format_strength_meter(&outcome.strength)))
    }
}

pub fn render_strength(result: &StrengthResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(result)?)
    } else {
        Ok(format!("Strength: {}", format_strength_meter(result)))
    }
}
