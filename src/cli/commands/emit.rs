//! `emit`: send one record through the process-wide logger.

use std::fmt;

use crate::cli::args::EmitArgs;
use crate::config::{LoggerConfig, apply_env_overrides, load_config};
use crate::error::LogwrapError;
use crate::global;

/// Builds the effective configuration for an `emit` invocation.
///
/// Precedence, lowest first: defaults or the config file, environment
/// overrides, command-line flags.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be loaded or an
/// environment override is invalid.
pub fn effective_config(args: &EmitArgs) -> Result<LoggerConfig, LogwrapError> {
    let mut config = if let Some(path) = &args.config {
        load_config(path)?
    } else {
        let mut config = LoggerConfig::default();
        apply_env_overrides(&mut config)?;
        config
    };

    if let Some(level) = args.min_level {
        config.minimum_level = level;
    }
    if args.timestamps {
        config.use_timestamps = true;
    }
    if args.observe_all {
        config.forward_to_tracing = true;
        config.observe_all_levels = true;
    }
    Ok(config)
}

/// Applies the effective configuration and emits the record.
///
/// # Errors
///
/// Returns a configuration error; emitting itself cannot fail.
///
/// # Panics
///
/// When the record level is FATAL.
pub fn run(args: &EmitArgs) -> Result<(), LogwrapError> {
    let config = effective_config(args)?;
    config.apply(global::logger());

    tracing::debug!(level = %args.level, context = %args.context, "emitting record");
    let error = args.error.as_ref().map(|e| e as &dyn fmt::Display);
    global::log(args.level, &args.context, &args.message, error);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::level::Level;

    fn args() -> EmitArgs {
        EmitArgs {
            level: Level::INFO,
            context: "cli".to_owned(),
            error: None,
            config: None,
            min_level: None,
            timestamps: false,
            observe_all: false,
            message: "m".to_owned(),
        }
    }

    #[test]
    fn flags_override_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("c.yaml");
        std::fs::write(&path, "minimum_level: fatal\n").unwrap();

        let config = effective_config(&EmitArgs {
            config: Some(path),
            min_level: Some(Level::DEBUG),
            timestamps: true,
            observe_all: true,
            ..args()
        })
        .unwrap();

        assert_eq!(config.minimum_level, Level::DEBUG);
        assert!(config.use_timestamps);
        assert!(config.forward_to_tracing);
        assert!(config.observe_all_levels);
    }

    #[test]
    fn missing_config_is_an_error() {
        let err = effective_config(&EmitArgs {
            config: Some(PathBuf::from("/nonexistent/logwrap.yaml")),
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::ExitCode::CONFIG_ERROR);
    }
}
