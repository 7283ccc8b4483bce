//! The observer capability.
//!
//! A logger forwards each record that passes its dispatch filter to at most
//! one registered [`LogObserver`]. The call is synchronous, runs on the
//! logging thread, and is not isolated: a panic inside `notify` unwinds
//! through the logging call.

use crate::level::Level;

/// Receives a copy of dispatched records.
pub trait LogObserver: Send + Sync {
    /// Called with the record's level and its fully rendered line.
    fn notify(&self, level: Level, message: &str);
}

impl<F> LogObserver for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn notify(&self, level: Level, message: &str) {
        self(level, message);
    }
}

/// Re-emits records as `tracing` events.
///
/// This is the bridge for hosts that already run a `tracing` subscriber and
/// want the facade's records alongside their own structured output. Events
/// are emitted under the `logwrap` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LogObserver for TracingObserver {
    fn notify(&self, level: Level, message: &str) {
        let rank = level.rank();
        match level {
            Level::DEBUG => tracing::debug!(target: "logwrap", level_rank = rank, "{message}"),
            Level::INFO => tracing::info!(target: "logwrap", level_rank = rank, "{message}"),
            Level::ERROR => tracing::error!(target: "logwrap", level_rank = rank, "{message}"),
            Level::FATAL => {
                tracing::error!(target: "logwrap", level_rank = rank, fatal = true, "{message}");
            }
            _ => tracing::warn!(target: "logwrap", level_rank = rank, "{message}"),
        }
    }
}
