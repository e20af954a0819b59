//! Panel configuration.
//!
//! Defaults mirror the widget: length 8 on a 5..=30 slider, uppercase,
//! lowercase and special characters enabled, one second of copy feedback.

use std::env::VarError;
use std::time::Duration;
use thiserror::Error;

use crate::charset::CharacterClassSelection;

pub const LENGTH_ENV: &str = "PWD_GEN_LENGTH";
pub const COPIED_MS_ENV: &str = "PWD_GEN_COPIED_MS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub copied_feedback: Duration,
    pub selection: CharacterClassSelection,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_length: 8,
            min_length: 5,
            max_length: 30,
            copied_feedback: Duration::from_secs(1),
            selection: CharacterClassSelection::default(),
        }
    }
}

impl PanelConfig {
    /// Builds the default configuration with environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GEN_LENGTH`: initial password length, clamped to the slider bounds
    /// - `PWD_GEN_COPIED_MS`: copy feedback duration in milliseconds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but is not
    /// a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(length) = read_env(LENGTH_ENV)? {
            let length = usize::try_from(length).unwrap_or(usize::MAX);
            config.default_length = config.clamp_length(length);
        }
        if let Some(ms) = read_env(COPIED_MS_ENV)? {
            config.copied_feedback = Duration::from_millis(ms);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Panel config: length {} in {}..={}, copy feedback {:?}",
            config.default_length,
            config.min_length,
            config.max_length,
            config.copied_feedback
        );

        Ok(config)
    }

    /// Clamps `length` into `[min_length, max_length]`.
    ///
    /// With inverted bounds the upper bound wins.
    pub fn clamp_length(&self, length: usize) -> usize {
        length.max(self.min_length).min(self.max_length)
    }
}

fn read_env(var: &'static str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
