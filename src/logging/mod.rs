// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use log::LevelFilter;
use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, LoggingError>;

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            level: config.log_level,
            file: config.log_file.clone(),
        }
    }

    /// Raises the level by `verbosity` steps (`-v`, `-vv`, ...).
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        for _ in 0..verbosity {
            self.level = match self.level {
                LevelFilter::Off => LevelFilter::Error,
                LevelFilter::Error => LevelFilter::Warn,
                LevelFilter::Warn => LevelFilter::Info,
                LevelFilter::Info => LevelFilter::Debug,
                LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
            };
        }
        self
    }
}

// Configure env_logger, writing to stderr or appending to a file
pub fn init(settings: &LogSettings) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(settings.level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true)
        .parse_default_env();

    if let Some(path) = &settings.file {
        let file = open_log_file(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().map_err(|_| LoggingError::AlreadyInitialized)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        let settings = LogSettings { level: LevelFilter::Warn, file: None };
        assert_eq!(settings.clone().with_verbosity(0).level, LevelFilter::Warn);
        assert_eq!(settings.clone().with_verbosity(2).level, LevelFilter::Debug);
        assert_eq!(settings.with_verbosity(9).level, LevelFilter::Trace);
    }

    #[test]
    fn log_file_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("passgen.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
