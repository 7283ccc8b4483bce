//! Configuration module
//!
//! Optional file and environment configuration for hosts that prefer not to
//! call the logger setters by hand. The logger never reads configuration on
//! its own; a [`LoggerConfig`] takes effect only when applied.
//!
//! ```yaml
//! minimum_level: info
//! use_timestamps: true
//! forward_to_tracing: true
//! observe_all_levels: false
//! ```

pub mod loader;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::logger::Logger;
use crate::observer::TracingObserver;

pub use loader::{ENV_MIN_LEVEL, ENV_OBSERVE_ALL, ENV_TIMESTAMPS, apply_env_overrides, load_config};

/// Settings that can be pushed into a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Minimum level for the default writer.
    pub minimum_level: Level,

    /// Deliver every record to the observer regardless of the minimum level.
    pub observe_all_levels: bool,

    /// Prefix lines with an RFC3339 timestamp.
    pub use_timestamps: bool,

    /// Register a [`TracingObserver`] as the logger's observer.
    pub forward_to_tracing: bool,
}

impl LoggerConfig {
    /// Pushes these settings through the logger's setters.
    ///
    /// With `forward_to_tracing` set, a [`TracingObserver`] replaces the
    /// current observer. Otherwise the registered observer is kept and only
    /// its observe-all flag follows `observe_all_levels`.
    pub fn apply(&self, logger: &Logger) {
        logger.set_minimum_level(self.minimum_level);
        logger.set_use_timestamps(self.use_timestamps);
        if self.forward_to_tracing {
            logger.set_observer(Some(Arc::new(TracingObserver)), self.observe_all_levels);
        } else {
            logger.set_observe_all_levels(self.observe_all_levels);
        }
        tracing::debug!(
            minimum_level = %self.minimum_level,
            use_timestamps = self.use_timestamps,
            forward_to_tracing = self.forward_to_tracing,
            observe_all_levels = self.observe_all_levels,
            "logger configuration applied"
        );
    }
}
