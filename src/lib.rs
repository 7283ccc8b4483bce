//! `logwrap` - leveled logging facade
//!
//! Callers report a message tagged with a [`Level`] and a calling-context
//! label. A [`Logger`] writes records at or above its minimum level to its
//! default writer, forwards them to at most one [`LogObserver`], and aborts
//! the caller with a panic when the record is FATAL.
//!
//! ```no_run
//! use logwrap::Level;
//!
//! logwrap::set_minimum_level(Level::INFO);
//! logwrap::debug("startup", "not shown");
//! logwrap::info("startup", "ready");                 // [startup] INFO - ready
//! logwrap::error_err("db", "conn failed", "timeout"); // [db] ERROR - conn failed (timeout)
//! ```
//!
//! The free functions forward to a process-wide logger. Independent
//! [`Logger`] instances carry their own settings and writer.

pub mod cli;
pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod observability;
pub mod observer;
pub mod record;

pub use config::LoggerConfig;
pub use error::{LogwrapError, Result};
pub use global::{
    debug, debug_err, error, error_err, fatal, fatal_err, info, info_err, log, logger,
    set_minimum_level, set_observer, set_use_timestamps,
};
pub use level::Level;
pub use logger::Logger;
pub use observer::{LogObserver, TracingObserver};
pub use record::Record;
