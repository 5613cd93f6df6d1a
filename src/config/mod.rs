//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. Command-line flags are layered on top by
//! [`Config::apply_cli`].
//!
//! # Environment Variables
//!
//! - `DAYBOOK_SEED_DEMO`: Seed the journal with demo entries (`1`/`true`/`yes`, defaults to off)
//! - `DAYBOOK_LOG_FORMAT`: `text` or `json` (defaults to `text`)
//! - `DAYBOOK_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error` (defaults to `info`)

use crate::cli::CliArgs;
use crate::constants::{
    DEFAULT_LOG_LEVEL, ENV_VAR_LOG_FORMAT, ENV_VAR_LOG_LEVEL, ENV_VAR_SEED_DEMO, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT, LOG_LEVELS,
};
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str(LOG_FORMAT_TEXT),
            LogFormat::Json => f.write_str(LOG_FORMAT_JSON),
        }
    }
}

/// Configuration for the daybook application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::config::{Config, LogFormat};
///
/// let config = Config {
///     seed_demo: true,
///     log_format: LogFormat::Json,
///     log_level: "debug".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start with the demo entries instead of an empty journal.
    pub seed_demo: bool,

    /// Format of the log stream written to stderr.
    pub log_format: LogFormat,

    /// Default level filter; `RUST_LOG` still takes precedence.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_demo: false,
            log_format: LogFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `DAYBOOK_SEED_DEMO` is not a recognised boolean
    /// - `DAYBOOK_LOG_FORMAT` is neither `text` nor `json`
    /// - `DAYBOOK_LOG_LEVEL` is not a known level
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use daybook::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Log format: {}", config.log_format),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let mut config = Config::default();

        if let Ok(raw) = env::var(ENV_VAR_SEED_DEMO) {
            config.seed_demo = parse_flag(ENV_VAR_SEED_DEMO, &raw)?;
        }

        if let Ok(raw) = env::var(ENV_VAR_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        if let Ok(raw) = env::var(ENV_VAR_LOG_LEVEL) {
            config.log_level = raw.trim().to_ascii_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    /// Layers command-line flags over the loaded values.
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if args.seed_demo {
            self.seed_demo = true;
        }
        if let Some(format) = args.log_format {
            self.log_format = format;
        }
        if args.verbose {
            self.log_level = "debug".to_string();
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the log level is not one of
    /// `trace`, `debug`, `info`, `warn`, `error`.
    pub fn validate(&self) -> AppResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

fn parse_flag(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
