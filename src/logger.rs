//! The logger facade.
//!
//! A [`Logger`] gates each record against its minimum level, writes passing
//! records to its default writer, forwards them to an optional observer,
//! and aborts the caller when the record is FATAL.
//!
//! Dispatch for a record at level `L` with minimum level `M`:
//!
//! ```text
//! matches  = M <= L
//! writer   ← line            if matches
//! observer ← (L, line)       if observer set and (observe_all_levels or matches)
//! panic_any(line or "")      if L == FATAL
//! ```
//!
//! # Concurrency
//!
//! Settings live in an immutable snapshot behind an `RwLock<Arc<_>>`.
//! Setters publish a new snapshot; each call clones the current `Arc` and
//! releases the lock before writing or notifying, so observers may call the
//! setters themselves. Concurrent calls are not ordered relative to each
//! other, but each line reaches the writer whole.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::level::Level;
use crate::observability::metrics::{self, Sink};
use crate::observer::LogObserver;
use crate::record::{Record, timestamp_now};

/// Per-logger configuration, replaced wholesale by the setters.
#[derive(Clone, Default)]
struct Settings {
    minimum_level: Level,
    observer: Option<Arc<dyn LogObserver>>,
    observe_all_levels: bool,
    use_timestamps: bool,
}

impl Settings {
    fn render(&self, record: &Record<'_>) -> String {
        if self.use_timestamps {
            record.render(Some(&timestamp_now()))
        } else {
            record.render(None)
        }
    }
}

/// Leveled logging facade with one default writer and at most one observer.
pub struct Logger {
    settings: RwLock<Arc<Settings>>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.snapshot();
        f.debug_struct("Logger")
            .field("minimum_level", &settings.minimum_level)
            .field("has_observer", &settings.observer.is_some())
            .field("observe_all_levels", &settings.observe_all_levels)
            .field("use_timestamps", &settings.use_timestamps)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates a logger writing to standard error with default settings:
    /// minimum level DEBUG, no observer, no timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Creates a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            settings: RwLock::new(Arc::default()),
            writer: Mutex::new(writer),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Replaces the minimum level for the default writer.
    pub fn set_minimum_level(&self, level: Level) {
        self.update(|s| s.minimum_level = level);
    }

    /// Replaces the observer and its observe-all flag together.
    ///
    /// With `observe_all_levels` set, the observer receives every record
    /// regardless of the minimum level. Pass `None` to remove the observer.
    pub fn set_observer(&self, observer: Option<Arc<dyn LogObserver>>, observe_all_levels: bool) {
        self.update(|s| {
            s.observer = observer;
            s.observe_all_levels = observe_all_levels;
        });
    }

    /// Changes the observe-all flag and keeps the registered observer.
    pub fn set_observe_all_levels(&self, observe_all_levels: bool) {
        self.update(|s| s.observe_all_levels = observe_all_levels);
    }

    /// Toggles the RFC3339 timestamp prefix.
    pub fn set_use_timestamps(&self, use_timestamps: bool) {
        self.update(|s| s.use_timestamps = use_timestamps);
    }

    /// Current minimum level.
    #[must_use]
    pub fn minimum_level(&self) -> Level {
        self.snapshot().minimum_level
    }

    /// Whether an observer is registered.
    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.snapshot().observer.is_some()
    }

    /// Whether the observer receives records below the minimum level.
    #[must_use]
    pub fn observes_all_levels(&self) -> bool {
        self.snapshot().observe_all_levels
    }

    /// Whether lines carry a timestamp prefix.
    #[must_use]
    pub fn uses_timestamps(&self) -> bool {
        self.snapshot().use_timestamps
    }

    fn snapshot(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn update(&self, apply: impl FnOnce(&mut Settings)) {
        let mut guard = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        apply(Arc::make_mut(&mut guard));
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Logs one record.
    ///
    /// # Panics
    ///
    /// Panics with the rendered line as a `String` payload when `level` is
    /// [`Level::FATAL`], after the writer and observer have been served. The
    /// payload is empty when neither received the record. Panics raised by
    /// the observer propagate unchanged.
    pub fn log(
        &self,
        level: Level,
        context: &str,
        message: &str,
        error: Option<&dyn fmt::Display>,
    ) {
        let record = Record {
            level,
            context,
            message,
            error,
        };
        self.dispatch(&record);
    }

    /// Logs a prebuilt record. Same contract as [`log`](Self::log).
    ///
    /// # Panics
    ///
    /// See [`log`](Self::log).
    pub fn dispatch(&self, record: &Record<'_>) {
        let line = self.emit(record);
        if record.level == Level::FATAL {
            abort(line);
        }
    }

    /// Serves the writer and observer; returns the rendered line, or an
    /// empty string when neither was served.
    fn emit(&self, record: &Record<'_>) -> String {
        let settings = self.snapshot();
        let matches_threshold = settings.minimum_level <= record.level;
        let mut rendered: Option<String> = None;

        if matches_threshold {
            let line = rendered.insert(settings.render(record));
            self.write_line(line);
            metrics::record_delivery(record.level, Sink::Default);
        }

        if let Some(observer) = &settings.observer {
            if settings.observe_all_levels || matches_threshold {
                let line = rendered.get_or_insert_with(|| settings.render(record));
                observer.notify(record.level, line);
                metrics::record_delivery(record.level, Sink::Observer);
            }
        }

        rendered.unwrap_or_default()
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Logging never fails; a broken writer drops the line.
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }

    // ------------------------------------------------------------------
    // Leveled entry points
    // ------------------------------------------------------------------

    /// Logs at DEBUG.
    pub fn debug(&self, context: &str, message: &str) {
        self.log(Level::DEBUG, context, message, None);
    }

    /// Logs at DEBUG with an error rendered after the message.
    pub fn debug_err(&self, context: &str, message: &str, err: impl fmt::Display) {
        self.log(Level::DEBUG, context, message, Some(&err));
    }

    /// Logs at INFO.
    pub fn info(&self, context: &str, message: &str) {
        self.log(Level::INFO, context, message, None);
    }

    /// Logs at INFO with an error rendered after the message.
    pub fn info_err(&self, context: &str, message: &str, err: impl fmt::Display) {
        self.log(Level::INFO, context, message, Some(&err));
    }

    /// Logs at ERROR.
    pub fn error(&self, context: &str, message: &str) {
        self.log(Level::ERROR, context, message, None);
    }

    /// Logs at ERROR with an error rendered after the message.
    pub fn error_err(&self, context: &str, message: &str, err: impl fmt::Display) {
        self.log(Level::ERROR, context, message, Some(&err));
    }

    /// Logs at FATAL and aborts the caller.
    ///
    /// # Panics
    ///
    /// Always, with the rendered line (or `""`) as a `String` payload.
    pub fn fatal(&self, context: &str, message: &str) -> ! {
        abort(self.emit(&Record::new(Level::FATAL, context, message)))
    }

    /// Logs at FATAL with an error rendered after the message, then aborts.
    ///
    /// # Panics
    ///
    /// Always, with the rendered line (or `""`) as a `String` payload.
    pub fn fatal_err(&self, context: &str, message: &str, err: impl fmt::Display) -> ! {
        abort(self.emit(&Record::new(Level::FATAL, context, message).with_error(&err)))
    }
}

fn abort(payload: String) -> ! {
    metrics::record_fatal();
    std::panic::panic_any(payload)
}
