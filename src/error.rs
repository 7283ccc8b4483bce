//! Error types for `logwrap`
//!
//! The logging operations themselves never fail. These errors cover the
//! surrounding surfaces: parsing levels, loading configuration files, and
//! the CLI.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `logwrap` CLI operations.
///
/// These codes follow Unix conventions (`sysexits.h` where one applies).
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Configuration error (invalid YAML, bad override)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// A FATAL record aborted the process (`EX_SOFTWARE`)
    pub const FATAL: i32 = 70;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `logwrap` operations.
#[derive(Debug, Error)]
pub enum LogwrapError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A level string could not be parsed
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogwrapError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Level(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Level Parsing
// ============================================================================

/// A string did not name a level or hold an integer rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid level '{input}': expected debug, info, error, fatal, or an integer rank")]
pub struct ParseLevelError {
    /// The rejected input
    pub input: String,
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Configuration file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// An environment override holds an unusable value
    #[error("invalid value for '{var}': got '{value}', expected {expected}")]
    InvalidEnvOverride {
        /// Name of the environment variable
        var: String,
        /// The value that was found
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `logwrap` operations.
pub type Result<T> = std::result::Result<T, LogwrapError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::FATAL, 70);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: LogwrapError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_level_error_exit_code() {
        let err: LogwrapError = ParseLevelError {
            input: "loud".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: LogwrapError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("logwrap.yaml"),
            line: Some(3),
            message: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("logwrap.yaml"));
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_env_override_display() {
        let err = ConfigError::InvalidEnvOverride {
            var: "LOGWRAP_TIMESTAMPS".to_string(),
            value: "maybe".to_string(),
            expected: "a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'LOGWRAP_TIMESTAMPS': got 'maybe', expected a boolean"
        );
    }
}
