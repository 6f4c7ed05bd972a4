//! Logger policy settings

use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Routing policy for a logger instance.
///
/// Constructed once (default or custom) and read-only for the logger's whole
/// lifetime. The sink-related invariants are validated when the logger is
/// built, not here.
///
/// # Example
///
/// ```
/// use sinklog::LogSettings;
///
/// let settings = LogSettings::default()
///     .with_deferred_sink("app_logs")
///     .with_lazy_batching(true)
///     .with_sink_levels(false, false, true);
/// assert!(settings.use_deferred_sink);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Console print enable for Ok records.
    pub print_ok: bool,
    /// Console print enable for Debug records.
    pub print_debug: bool,
    /// Console print enable for Error records.
    pub print_error: bool,

    /// Deferred-sink enable for Ok records (immediate mode only).
    pub sink_ok: bool,
    /// Deferred-sink enable for Debug records (immediate mode only).
    pub sink_debug: bool,
    /// Deferred-sink enable for Error records (immediate mode only).
    pub sink_error: bool,

    /// Master gate for the deferred-sink path.
    pub use_deferred_sink: bool,
    /// Target identifier handed to the sink implementation (a table name or
    /// similar). Required whenever `use_deferred_sink` is set.
    pub sink_table: Option<String>,
    /// Accumulate records in memory and deliver them in one batch on flush,
    /// instead of one sink call per record.
    pub lazy_batching: bool,
    /// Reserved knob for a buffered text-writer output mode. Carried in the
    /// configuration but not consulted by the routing engine.
    pub lazy_text_writer: bool,
}

impl Default for LogSettings {
    /// Print all levels to the console; never use the deferred sink.
    fn default() -> Self {
        Self {
            print_ok: true,
            print_debug: true,
            print_error: true,
            sink_ok: false,
            sink_debug: false,
            sink_error: false,
            use_deferred_sink: false,
            sink_table: None,
            lazy_batching: false,
            lazy_text_writer: false,
        }
    }
}

impl LogSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-level console print enables
    #[must_use = "builder methods return a new value"]
    pub fn with_print_levels(mut self, ok: bool, debug: bool, error: bool) -> Self {
        self.print_ok = ok;
        self.print_debug = debug;
        self.print_error = error;
        self
    }

    /// Set the per-level deferred-sink enables
    #[must_use = "builder methods return a new value"]
    pub fn with_sink_levels(mut self, ok: bool, debug: bool, error: bool) -> Self {
        self.sink_ok = ok;
        self.sink_debug = debug;
        self.sink_error = error;
        self
    }

    /// Enable the deferred sink targeting `table`
    #[must_use = "builder methods return a new value"]
    pub fn with_deferred_sink(mut self, table: impl Into<String>) -> Self {
        self.use_deferred_sink = true;
        self.sink_table = Some(table.into());
        self
    }

    /// Select batched-buffer mode vs. immediate per-record dispatch
    #[must_use = "builder methods return a new value"]
    pub fn with_lazy_batching(mut self, lazy: bool) -> Self {
        self.lazy_batching = lazy;
        self
    }

    /// Set the reserved lazy text-writer knob
    #[must_use = "builder methods return a new value"]
    pub fn with_lazy_text_writer(mut self, lazy: bool) -> Self {
        self.lazy_text_writer = lazy;
        self
    }

    /// Console print enabled for `severity`?
    #[must_use]
    pub fn should_print(&self, severity: Severity) -> bool {
        match severity {
            Severity::Ok => self.print_ok,
            Severity::Debug => self.print_debug,
            Severity::Error => self.print_error,
        }
    }

    /// Deferred sink enabled for `severity` in immediate mode?
    #[must_use]
    pub fn sink_enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Ok => self.sink_ok,
            Severity::Debug => self.sink_debug,
            Severity::Error => self.sink_error,
        }
    }
}
