//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The calculator reported an error
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] keypad_calc::core::CalcError),

    /// Serialization of command output failed
    #[error("Output error: {message}")]
    Output {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an output error
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

impl From<keypad_calc::config::ConfigError> for CliError {
    fn from(err: keypad_calc::config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::output(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for CliError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypad_calc::config::ConfigError;
    use keypad_calc::core::CalcError;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad file");
        assert_eq!(err.to_string(), "Configuration error: bad file");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("unknown operator '^'");
        assert_eq!(err.to_string(), "Invalid argument: unknown operator '^'");
    }

    #[test]
    fn test_evaluation_error_uses_display_text() {
        let err: CliError = CalcError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Evaluation failed: Cannot divide by 0");
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigError::invalid("max_digits must be at least 1").into();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().contains("max_digits"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
