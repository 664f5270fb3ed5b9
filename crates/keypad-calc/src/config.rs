//! Calculator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::display::{DEFAULT_EXPONENT_FRACTION_DIGITS, DEFAULT_MAX_DIGITS};
use crate::core::DEFAULT_PRECISION_DIGITS;

/// Default duration of the cosmetic press highlight
pub const DEFAULT_PRESS_FEEDBACK_MS: u64 = 150;

/// Largest fraction digit count accepted for exponential notation
const MAX_EXPONENT_FRACTION_DIGITS: usize = 20;

/// Largest stabilization precision an f64 can meaningfully carry
const MAX_PRECISION_DIGITS: u32 = 15;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// File extension is neither JSON nor YAML
    #[error("unsupported config format: {extension}")]
    UnsupportedFormat {
        /// Offending extension (empty when missing)
        extension: String,
    },

    /// A value is out of range
    #[error("invalid config: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum characters on the display
    pub max_digits: usize,
    /// Fraction digits in exponential notation
    pub exponent_fraction_digits: usize,
    /// Decimal digits kept when stabilizing operands
    pub precision_digits: u32,
    /// Press highlight duration in milliseconds
    pub press_feedback_ms: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            exponent_fraction_digits: DEFAULT_EXPONENT_FRACTION_DIGITS,
            precision_digits: DEFAULT_PRECISION_DIGITS,
            press_feedback_ms: DEFAULT_PRESS_FEEDBACK_MS,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display cap
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Set exponential fraction digits
    #[must_use]
    pub const fn with_exponent_fraction_digits(mut self, digits: usize) -> Self {
        self.exponent_fraction_digits = digits;
        self
    }

    /// Set stabilization precision
    #[must_use]
    pub const fn with_precision_digits(mut self, digits: u32) -> Self {
        self.precision_digits = digits;
        self
    }

    /// Set press highlight duration
    #[must_use]
    pub const fn with_press_feedback_ms(mut self, ms: u64) -> Self {
        self.press_feedback_ms = ms;
        self
    }

    /// Checks every value is within range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_digits == 0 {
            return Err(ConfigError::invalid("max_digits must be at least 1"));
        }
        if self.exponent_fraction_digits > MAX_EXPONENT_FRACTION_DIGITS {
            return Err(ConfigError::invalid(format!(
                "exponent_fraction_digits must be at most {MAX_EXPONENT_FRACTION_DIGITS}"
            )));
        }
        if self.precision_digits > MAX_PRECISION_DIGITS {
            return Err(ConfigError::invalid(format!(
                "precision_digits must be at most {MAX_PRECISION_DIGITS}"
            )));
        }
        Ok(())
    }

    /// Parses a JSON document and validates it
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML document and validates it
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `.json`, `.yaml` or `.yml` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json(&std::fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}
