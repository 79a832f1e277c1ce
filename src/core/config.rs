// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::models::CharacterClassConfig;

// Configuration for the password generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub default_classes: CharacterClassConfig,
    pub wordlist_path: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: 8,
            min_length: 6,
            max_length: 20,
            default_classes: CharacterClassConfig::default(),
            wordlist_path: None,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Malformed values are
    /// logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        parse_into(&lookup, "PASSGEN_DEFAULT_LENGTH", &mut config.default_length);
        parse_into(&lookup, "PASSGEN_MIN_LENGTH", &mut config.min_length);
        parse_into(&lookup, "PASSGEN_MAX_LENGTH", &mut config.max_length);

        parse_flag(&lookup, "PASSGEN_UPPERCASE", &mut config.default_classes.upper_case);
        parse_flag(&lookup, "PASSGEN_LOWERCASE", &mut config.default_classes.lower_case);
        parse_flag(&lookup, "PASSGEN_NUMBERS", &mut config.default_classes.numbers);
        parse_flag(&lookup, "PASSGEN_SYMBOLS", &mut config.default_classes.symbols);
        parse_flag(&lookup, "PASSGEN_EASY", &mut config.default_classes.easy_to_remember);

        if let Some(path) = lookup("PASSGEN_WORDLIST") {
            if !path.trim().is_empty() {
                config.wordlist_path = Some(PathBuf::from(path));
            }
        }

        // Logging
        parse_into(&lookup, "PASSGEN_LOG_LEVEL", &mut config.log_level);

        if let Some(path) = lookup("PASSGEN_LOG_FILE") {
            if !path.trim().is_empty() {
                config.log_file = Some(PathBuf::from(path));
            }
        }

        config.validate();
        config
    }

    /// Repairs inconsistent length settings in place.
    pub fn validate(&mut self) {
        if self.min_length == 0 {
            log::warn!("Minimum password length must be at least 1, using 1");
            self.min_length = 1;
        }
        if self.min_length > self.max_length {
            log::warn!(
                "Minimum length {} exceeds maximum {}, swapping",
                self.min_length,
                self.max_length
            );
            std::mem::swap(&mut self.min_length, &mut self.max_length);
        }
        let clamped = self.default_length.clamp(self.min_length, self.max_length);
        if clamped != self.default_length {
            log::warn!(
                "Default length {} outside {}..={}, using {}",
                self.default_length,
                self.min_length,
                self.max_length,
                clamped
            );
            self.default_length = clamped;
        }
    }

    pub fn length_in_range(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

fn parse_flag<F>(lookup: &F, key: &str, target: &mut bool)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(key) {
        match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => *target = true,
            "0" | "false" | "no" | "off" => *target = false,
            _ => log::warn!("Ignoring invalid flag '{}' for {}", val, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_slider() {
        let config = config_from(&[]);
        assert_eq!(config.default_length, 8);
        assert_eq!(config.min_length, 6);
        assert_eq!(config.max_length, 20);
        assert!(config.default_classes.lower_case);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.wordlist_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PASSGEN_DEFAULT_LENGTH", "16"),
            ("PASSGEN_MAX_LENGTH", "32"),
            ("PASSGEN_SYMBOLS", "yes"),
            ("PASSGEN_LOWERCASE", "off"),
            ("PASSGEN_LOG_LEVEL", "debug"),
            ("PASSGEN_WORDLIST", "/tmp/words.txt"),
        ]);
        assert_eq!(config.default_length, 16);
        assert_eq!(config.max_length, 32);
        assert!(config.default_classes.symbols);
        assert!(!config.default_classes.lower_case);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.wordlist_path, Some(PathBuf::from("/tmp/words.txt")));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("PASSGEN_DEFAULT_LENGTH", "lots"),
            ("PASSGEN_NUMBERS", "maybe"),
            ("PASSGEN_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_length, 8);
        assert!(!config.default_classes.numbers);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn inverted_bounds_are_swapped_and_default_clamped() {
        let config = config_from(&[
            ("PASSGEN_MIN_LENGTH", "30"),
            ("PASSGEN_MAX_LENGTH", "10"),
            ("PASSGEN_DEFAULT_LENGTH", "4"),
        ]);
        assert_eq!(config.min_length, 10);
        assert_eq!(config.max_length, 30);
        assert_eq!(config.default_length, 10);
        assert!(config.length_in_range(30));
        assert!(!config.length_in_range(31));
    }

    #[test]
    fn zero_minimum_is_raised() {
        let config = config_from(&[("PASSGEN_MIN_LENGTH", "0")]);
        assert_eq!(config.min_length, 1);
    }
}
