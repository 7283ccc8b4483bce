//! Process-wide logger.
//!
//! These free functions forward to one lazily created [`Logger`] that
//! writes to standard error. Libraries that want isolated configuration
//! should hold their own `Logger` instead.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::level::Level;
use crate::logger::Logger;
use crate::observer::LogObserver;

static GLOBAL: LazyLock<Logger> = LazyLock::new(Logger::new);

/// Returns the process-wide logger.
#[must_use]
pub fn logger() -> &'static Logger {
    &GLOBAL
}

/// Sets the process-wide minimum level.
pub fn set_minimum_level(level: Level) {
    GLOBAL.set_minimum_level(level);
}

/// Sets the process-wide observer and its observe-all flag.
pub fn set_observer(observer: Option<Arc<dyn LogObserver>>, observe_all_levels: bool) {
    GLOBAL.set_observer(observer, observe_all_levels);
}

/// Toggles timestamps on the process-wide logger.
pub fn set_use_timestamps(use_timestamps: bool) {
    GLOBAL.set_use_timestamps(use_timestamps);
}

/// Logs through the process-wide logger.
///
/// # Panics
///
/// On [`Level::FATAL`]; see [`Logger::log`].
pub fn log(level: Level, context: &str, message: &str, error: Option<&dyn fmt::Display>) {
    GLOBAL.log(level, context, message, error);
}

/// Logs at DEBUG through the process-wide logger.
pub fn debug(context: &str, message: &str) {
    GLOBAL.debug(context, message);
}

/// Logs at DEBUG with an error through the process-wide logger.
pub fn debug_err(context: &str, message: &str, err: impl fmt::Display) {
    GLOBAL.debug_err(context, message, err);
}

/// Logs at INFO through the process-wide logger.
pub fn info(context: &str, message: &str) {
    GLOBAL.info(context, message);
}

/// Logs at INFO with an error through the process-wide logger.
pub fn info_err(context: &str, message: &str, err: impl fmt::Display) {
    GLOBAL.info_err(context, message, err);
}

/// Logs at ERROR through the process-wide logger.
pub fn error(context: &str, message: &str) {
    GLOBAL.error(context, message);
}

/// Logs at ERROR with an error through the process-wide logger.
pub fn error_err(context: &str, message: &str, err: impl fmt::Display) {
    GLOBAL.error_err(context, message, err);
}

/// Logs at FATAL through the process-wide logger, then aborts.
///
/// # Panics
///
/// Always; see [`Logger::fatal`].
pub fn fatal(context: &str, message: &str) -> ! {
    GLOBAL.fatal(context, message)
}

/// Logs at FATAL with an error through the process-wide logger, then aborts.
///
/// # Panics
///
/// Always; see [`Logger::fatal_err`].
pub fn fatal_err(context: &str, message: &str, err: impl fmt::Display) -> ! {
    GLOBAL.fatal_err(context, message, err)
}
