//! Logger façade and dispatch engine

use super::buffer::RecordBuffer;
use super::call_site::CallSite;
use super::error::{LoggerError, Result};
use super::record::LogRecord;
use super::record_id::RecordIdGenerator;
use super::settings::LogSettings;
use super::severity::Severity;
use super::sink::DeferredSink;
use crate::console::ConsolePrinter;
use std::backtrace::Backtrace;
use std::sync::Arc;

/// Message logged by the `*_start` scope markers.
const START_MESSAGE: &str = "Start";

fn current_stack() -> String {
    Backtrace::force_capture().to_string()
}

/// The logging façade call sites use.
///
/// A logger owns an immutable [`LogSettings`] policy, a pending-record buffer,
/// and an optional deferred sink. Every logging call builds an immutable
/// [`LogRecord`] and runs it through one dispatch path: console print, then —
/// when the deferred sink is active — either an immediate sink call or an
/// enqueue for a later batched flush.
///
/// Each operation exists in a blocking form and a suspend-eligible `_async`
/// form; both delegate to the same dispatch routine. The blocking form waits
/// unconditionally for the sink, the `_async` form returns a future the
/// caller may await or drop at their own risk.
///
/// # Example
///
/// ```
/// use sinklog::prelude::*;
/// use sinklog::call_site;
///
/// let logger = Logger::with_defaults();
/// logger.log_ok("service ready", call_site!())?;
/// logger.close()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct Logger {
    settings: LogSettings,
    printer: ConsolePrinter,
    ids: RecordIdGenerator,
    buffer: RecordBuffer,
    sink: Option<Arc<dyn DeferredSink>>,
    /// Serializes batched flushes; held across the sink await.
    flush_gate: tokio::sync::Mutex<()>,
    closed: bool,
}

impl Logger {
    /// Build a logger from `settings` and an optional deferred sink.
    ///
    /// Fails with [`LoggerError::InvalidConfiguration`] before any logging
    /// can occur when the settings enable the deferred sink without naming a
    /// sink table, or without a sink to call.
    pub fn new(settings: LogSettings, sink: Option<Arc<dyn DeferredSink>>) -> Result<Self> {
        if settings.use_deferred_sink {
            if settings.sink_table.is_none() {
                return Err(LoggerError::config(
                    "Logger",
                    "sink_table is not set but use_deferred_sink is enabled",
                ));
            }
            if sink.is_none() {
                return Err(LoggerError::config(
                    "Logger",
                    "no deferred sink supplied but use_deferred_sink is enabled",
                ));
            }
        }
        Ok(Self::assemble(settings, sink))
    }

    /// Default settings: print all levels, no deferred sink.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::assemble(LogSettings::default(), None)
    }

    fn assemble(settings: LogSettings, sink: Option<Arc<dyn DeferredSink>>) -> Self {
        let capacity = if settings.lazy_batching { 8 } else { 0 };
        Self {
            printer: ConsolePrinter::new(&settings),
            ids: RecordIdGenerator::new(),
            buffer: RecordBuffer::with_capacity(capacity),
            sink,
            flush_gate: tokio::sync::Mutex::new(()),
            closed: false,
            settings,
        }
    }

    /// The policy this logger was built with.
    pub fn settings(&self) -> &LogSettings {
        &self.settings
    }

    /// Number of records currently awaiting a batched flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    fn make_record(
        &self,
        message: String,
        severity: Severity,
        trigger: String,
        stack: Option<String>,
    ) -> LogRecord {
        LogRecord::new(self.ids.next_id(), severity, trigger, message, stack)
    }

    /// The single dispatch path under every call form.
    ///
    /// Buffered records skip the per-level sink filter; filtering is an
    /// immediate-mode concern only.
    async fn dispatch(&self, record: LogRecord) -> Result<()> {
        self.printer.print(&record);

        if !self.settings.use_deferred_sink {
            return Ok(());
        }
        if self.settings.lazy_batching {
            self.buffer.push(record);
            return Ok(());
        }
        if !self.settings.sink_enabled(record.severity) {
            return Ok(());
        }

        let Some(sink) = self.sink.as_ref() else {
            // Construction validates this; reachable only through misuse.
            return Err(LoggerError::config(
                "Logger",
                "deferred sink enabled but no sink is attached",
            ));
        };
        sink.persist(vec![record]).await
    }

    /// Log `message` at `severity`, blocking until dispatch completes.
    ///
    /// An `Error` record with no explicit stack gets the current backtrace
    /// attached; other severities carry a stack only when supplied.
    pub fn log(
        &self,
        message: impl Into<String>,
        severity: Severity,
        stack: Option<String>,
        site: CallSite,
    ) -> Result<()> {
        futures::executor::block_on(self.log_async(message, severity, stack, site))
    }

    /// Suspend-eligible form of [`log`](Self::log).
    pub async fn log_async(
        &self,
        message: impl Into<String>,
        severity: Severity,
        stack: Option<String>,
        site: CallSite,
    ) -> Result<()> {
        let stack = match (severity, stack) {
            (Severity::Error, None) => Some(current_stack()),
            (_, stack) => stack,
        };
        let trigger = site.descriptor_for(severity);
        self.dispatch(self.make_record(message.into(), severity, trigger, stack))
            .await
    }

    /// Log an Ok-level message.
    pub fn log_ok(&self, message: impl Into<String>, site: CallSite) -> Result<()> {
        futures::executor::block_on(self.log_ok_async(message, site))
    }

    pub async fn log_ok_async(&self, message: impl Into<String>, site: CallSite) -> Result<()> {
        self.dispatch(self.make_record(
            message.into(),
            Severity::Ok,
            site.short_descriptor(),
            None,
        ))
        .await
    }

    /// Log a Debug-level message.
    pub fn log_debug(&self, message: impl Into<String>, site: CallSite) -> Result<()> {
        futures::executor::block_on(self.log_debug_async(message, site))
    }

    pub async fn log_debug_async(&self, message: impl Into<String>, site: CallSite) -> Result<()> {
        self.dispatch(self.make_record(
            message.into(),
            Severity::Debug,
            site.full_descriptor(),
            None,
        ))
        .await
    }

    /// Log an Error-level message. When `stack` is `None` the current
    /// backtrace is captured and attached.
    pub fn log_error(
        &self,
        message: impl Into<String>,
        stack: Option<String>,
        site: CallSite,
    ) -> Result<()> {
        futures::executor::block_on(self.log_error_async(message, stack, site))
    }

    pub async fn log_error_async(
        &self,
        message: impl Into<String>,
        stack: Option<String>,
        site: CallSite,
    ) -> Result<()> {
        let stack = Some(stack.unwrap_or_else(current_stack));
        self.dispatch(self.make_record(
            message.into(),
            Severity::Error,
            site.full_descriptor(),
            stack,
        ))
        .await
    }

    /// Mark the beginning of a traced scope at Ok level.
    ///
    /// Start markers always carry the full call-site descriptor, line and
    /// file included.
    pub fn log_ok_start(&self, site: CallSite) -> Result<()> {
        futures::executor::block_on(self.log_ok_start_async(site))
    }

    pub async fn log_ok_start_async(&self, site: CallSite) -> Result<()> {
        self.dispatch(self.make_record(
            START_MESSAGE.to_string(),
            Severity::Ok,
            site.full_descriptor(),
            None,
        ))
        .await
    }

    /// Mark the beginning of a traced scope at Debug level.
    pub fn log_debug_start(&self, site: CallSite) -> Result<()> {
        futures::executor::block_on(self.log_debug_start_async(site))
    }

    pub async fn log_debug_start_async(&self, site: CallSite) -> Result<()> {
        self.dispatch(self.make_record(
            START_MESSAGE.to_string(),
            Severity::Debug,
            site.full_descriptor(),
            None,
        ))
        .await
    }

    /// Log the failure of `result` at Error level (with a captured backtrace)
    /// and hand the outcome back unchanged; a success logs nothing.
    ///
    /// The outer `Result` carries a dispatch or sink failure — the original
    /// outcome is never converted between success and failure.
    pub fn log_result<T>(
        &self,
        result: std::result::Result<T, String>,
        site: CallSite,
    ) -> Result<std::result::Result<T, String>> {
        futures::executor::block_on(self.log_result_async(result, site))
    }

    pub async fn log_result_async<T>(
        &self,
        result: std::result::Result<T, String>,
        site: CallSite,
    ) -> Result<std::result::Result<T, String>> {
        if let Err(message) = &result {
            self.dispatch(self.make_record(
                message.clone(),
                Severity::Error,
                site.full_descriptor(),
                Some(current_stack()),
            ))
            .await?;
        }
        Ok(result)
    }

    /// Status-only variant of [`log_result`](Self::log_result): logs on
    /// failure and returns the ok/err marker unchanged.
    pub fn log_status(
        &self,
        result: std::result::Result<(), String>,
        site: CallSite,
    ) -> Result<std::result::Result<(), String>> {
        futures::executor::block_on(self.log_status_async(result, site))
    }

    pub async fn log_status_async(
        &self,
        result: std::result::Result<(), String>,
        site: CallSite,
    ) -> Result<std::result::Result<(), String>> {
        self.log_result_async(result, site).await
    }

    /// Drain the buffer and hand the whole batch to the deferred sink in a
    /// single call.
    ///
    /// Flushes for one logger never overlap; concurrent calls queue on the
    /// flush gate. An empty buffer still reaches the sink as an empty batch —
    /// sink implementations may rely on being called. Without a configured
    /// sink this only drains.
    pub async fn flush_async(&self) -> Result<()> {
        let _serialized = self.flush_gate.lock().await;
        let batch = self.buffer.drain();
        match self.sink.as_ref() {
            Some(sink) => sink.persist(batch).await,
            None => Ok(()),
        }
    }

    /// Blocking form of [`flush_async`](Self::flush_async).
    pub fn flush(&self) -> Result<()> {
        futures::executor::block_on(self.flush_async())
    }

    /// Final synchronous flush. Consuming `self` makes logging after close
    /// impossible.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        futures::executor::block_on(self.flush_async())
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use sinklog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .settings(LogSettings::default().with_print_levels(true, false, true))
    ///     .build()?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        // Implicit lifecycle end: same final flush as close(), but errors
        // cannot propagate from drop.
        if let Err(e) = futures::executor::block_on(self.flush_async()) {
            eprintln!("[LOGGER ERROR] final flush failed during drop: {}", e);
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use sinklog::prelude::*;
/// use sinklog::core::sink_fn;
///
/// let logger = Logger::builder()
///     .settings(
///         LogSettings::default()
///             .with_deferred_sink("app_logs")
///             .with_lazy_batching(true),
///     )
///     .sink(sink_fn(|batch| async move {
///         println!("persisting {} records", batch.len());
///         Ok(())
///     }))
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    settings: LogSettings,
    sink: Option<Arc<dyn DeferredSink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            settings: LogSettings::default(),
            sink: None,
        }
    }

    /// Set the routing policy
    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: LogSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Attach the deferred sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn DeferredSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger, validating the sink configuration
    pub fn build(self) -> Result<Logger> {
        Logger::new(self.settings, self.sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
