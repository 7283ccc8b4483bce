//! Observability module
//!
//! Diagnostics logging and dispatch counters for `logwrap` itself.

pub mod logging;
pub mod metrics;

pub use logging::{LogFormat, init_logging};
pub use metrics::describe_metrics;
