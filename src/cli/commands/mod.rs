//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check_config;
pub mod emit;
pub mod version;

use std::any::Any;

use crate::cli::args::{Cli, Commands};
use crate::error::{ExitCode, LogwrapError};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
///
/// # Panics
///
/// `emit` at FATAL level aborts through the logger's panic.
pub fn dispatch(cli: Cli) -> Result<(), LogwrapError> {
    match cli.command {
        Commands::Emit(args) => emit::run(&args),
        Commands::CheckConfig(args) => check_config::run(&args),
        Commands::Version(args) => version::run(&args),
    }
}

/// Exit code for a panic caught around [`dispatch`].
///
/// FATAL records unwind with a `String` payload and map to
/// [`ExitCode::FATAL`]. Any other payload is not a log record and yields
/// `None`, so the caller resumes the unwind.
#[must_use]
pub fn panic_exit_code(payload: &(dyn Any + Send)) -> Option<i32> {
    payload.is::<String>().then_some(ExitCode::FATAL)
}
