//! Configuration loader
//!
//! Loading runs in two steps:
//! 1. YAML file → [`LoggerConfig`] (an empty file yields the defaults)
//! 2. Environment overrides (`LOGWRAP_MIN_LEVEL`, `LOGWRAP_TIMESTAMPS`,
//!    `LOGWRAP_OBSERVE_ALL`) on top

use std::path::Path;

use crate::config::LoggerConfig;
use crate::error::ConfigError;
use crate::level::Level;

/// Overrides `minimum_level`.
pub const ENV_MIN_LEVEL: &str = "LOGWRAP_MIN_LEVEL";

/// Overrides `use_timestamps`.
pub const ENV_TIMESTAMPS: &str = "LOGWRAP_TIMESTAMPS";

/// Overrides `observe_all_levels`.
pub const ENV_OBSERVE_ALL: &str = "LOGWRAP_OBSERVE_ALL";

/// Loads a YAML file and applies environment overrides.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if `path` does not exist,
/// `ConfigError::Read` for other I/O failures, `ConfigError::ParseError`
/// for malformed YAML or unknown keys, and
/// `ConfigError::InvalidEnvOverride` for unusable override values.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut config = parse_config(&text, path)?;
    apply_env_overrides(&mut config)?;
    tracing::debug!(path = %path.display(), ?config, "configuration loaded");
    Ok(config)
}

/// Parses YAML text. `path` is used only for error messages.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` for malformed YAML or unknown keys.
pub fn parse_config(text: &str, path: &Path) -> Result<LoggerConfig, ConfigError> {
    if text.trim().is_empty() {
        return Ok(LoggerConfig::default());
    }
    serde_yaml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|loc| loc.line()),
        message: e.to_string(),
    })
}

/// Applies overrides from the process environment.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvOverride` if a set variable cannot be
/// parsed.
pub fn apply_env_overrides(config: &mut LoggerConfig) -> Result<(), ConfigError> {
    apply_overrides_from(config, |var| std::env::var(var).ok())
}

/// Applies overrides from an arbitrary lookup. Unset and empty values are
/// skipped.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvOverride` if a value cannot be parsed.
pub fn apply_overrides_from(
    config: &mut LoggerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

    if let Some(value) = get(ENV_MIN_LEVEL) {
        config.minimum_level =
            value
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidEnvOverride {
                    var: ENV_MIN_LEVEL.to_owned(),
                    value: value.clone(),
                    expected: "debug, info, error, fatal, or an integer rank".to_owned(),
                })?;
    }
    if let Some(value) = get(ENV_TIMESTAMPS) {
        config.use_timestamps = parse_bool(ENV_TIMESTAMPS, &value)?;
    }
    if let Some(value) = get(ENV_OBSERVE_ALL) {
        config.observe_all_levels = parse_bool(ENV_OBSERVE_ALL, &value)?;
    }
    Ok(())
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvOverride {
            var: var.to_owned(),
            value: value.to_owned(),
            expected: "a boolean (true/false, 1/0, yes/no, on/off)".to_owned(),
        }),
    }
}
