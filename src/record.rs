//! Log records and their single-line rendering.
//!
//! Layout without timestamps:
//!
//! ```text
//! [{context}] {LEVEL} - {message}
//! [{context}] {LEVEL} - {message} ({error})
//! ```
//!
//! With timestamps the line is prefixed by an RFC3339 timestamp and a space.

use std::fmt::{self, Write as _};

use chrono::{Local, SecondsFormat};

use crate::level::Level;

/// One call's worth of data. Built per call, rendered, then dropped.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    /// Severity of the record.
    pub level: Level,
    /// Free-text label naming the call site.
    pub context: &'a str,
    /// Message body.
    pub message: &'a str,
    /// Optional error, used only for its `Display` text.
    pub error: Option<&'a dyn fmt::Display>,
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("context", &self.context)
            .field("message", &self.message)
            .field("error", &self.error.map(ToString::to_string))
            .finish()
    }
}

impl<'a> Record<'a> {
    /// Creates a record without an error.
    #[must_use]
    pub const fn new(level: Level, context: &'a str, message: &'a str) -> Self {
        Self {
            level,
            context,
            message,
            error: None,
        }
    }

    /// Attaches an error rendered as `"{message} ({error})"`.
    #[must_use]
    pub const fn with_error(mut self, error: &'a dyn fmt::Display) -> Self {
        self.error = Some(error);
        self
    }

    /// Renders the record, prefixed by `timestamp` when one is given.
    #[must_use]
    pub fn render(&self, timestamp: Option<&str>) -> String {
        let mut line = String::with_capacity(self.context.len() + self.message.len() + 48);
        if let Some(ts) = timestamp {
            line.push_str(ts);
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "[{}] {} - {}", self.context, self.level, self.message);
        if let Some(err) = self.error {
            let _ = write!(line, " ({err})");
        }
        line
    }
}

/// Current local time in RFC3339 with second precision (`Z` for UTC).
#[must_use]
pub fn timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
