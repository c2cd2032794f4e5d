//! Demo configuration, read from the environment once at start-up.

use lettermix_core::settings::{DEFAULT_ALPHABET, DEFAULT_REPEAT};
use thiserror::Error;

/// Seed for the shared generator; clock seeding when unset.
pub const SEED_VAR: &str = "LETTERMIX_SEED";
/// Starting alphabet for both boards.
pub const ALPHABET_VAR: &str = "LETTERMIX_ALPHABET";
/// Starting repeat count for both boards.
pub const REPEAT_VAR: &str = "LETTERMIX_REPEAT";
/// `json` or `pretty`.
pub const LOG_FORMAT_VAR: &str = "LETTERMIX_LOG_FORMAT";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something that does not parse.
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        /// The offending variable.
        var: &'static str,
        /// What the variable should hold.
        expected: &'static str,
        /// The raw value.
        value: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Demo settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Explicit generator seed.
    pub seed: Option<u32>,
    /// Alphabet both boards start with.
    pub alphabet: String,
    /// Repeat count both boards start with; the boards clamp it.
    pub repeat: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            alphabet: DEFAULT_ALPHABET.to_owned(),
            repeat: DEFAULT_REPEAT,
            log_format: LogFormat::default(),
        }
    }
}

impl DemoConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// if set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a set variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: SEED_VAR,
                expected: "an unsigned 32-bit integer",
                value,
            })?);
        }
        if let Some(value) = lookup(ALPHABET_VAR) {
            config.alphabet = value;
        }
        if let Some(value) = lookup(REPEAT_VAR) {
            config.repeat = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: REPEAT_VAR,
                expected: "a non-negative integer",
                value,
            })?;
        }
        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            let format = value.trim().to_ascii_lowercase();
            config.log_format = match format.as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: LOG_FORMAT_VAR,
                        expected: "\"json\" or \"pretty\"",
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}
