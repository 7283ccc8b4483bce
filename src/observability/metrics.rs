//! Dispatch counters.
//!
//! Counters are recorded through the `metrics` facade. No recorder is
//! installed here; without one the macros are no-ops. A host that installs
//! its own exporter calls [`describe_metrics`] right after installing it so
//! the descriptions reach that recorder.

use metrics::{counter, describe_counter};

use crate::level::Level;

/// Records written, labelled by `level` and `sink`.
pub const RECORDS_TOTAL: &str = "logwrap_records_total";

/// FATAL aborts raised.
pub const FATAL_TOTAL: &str = "logwrap_fatal_total";

/// Where a record was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// The logger's default writer.
    Default,
    /// The registered observer.
    Observer,
}

impl Sink {
    /// Label value for the `sink` label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Observer => "observer",
        }
    }
}

/// Registers metric descriptions with the currently installed recorder.
///
/// Call once after installing a recorder. Calling it again is harmless; the
/// recorder simply receives the same descriptions.
pub fn describe_metrics() {
    describe_counter!(RECORDS_TOTAL, "Log records delivered, by level and sink");
    describe_counter!(FATAL_TOTAL, "FATAL records that aborted the caller");
}

/// Counts one delivery of a record.
pub fn record_delivery(level: Level, sink: Sink) {
    counter!(RECORDS_TOTAL, "level" => level.as_str(), "sink" => sink.as_str()).increment(1);
}

/// Counts one FATAL abort.
pub fn record_fatal() {
    counter!(FATAL_TOTAL).increment(1);
}
