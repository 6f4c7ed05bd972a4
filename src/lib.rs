//! # sinklog
//!
//! A structured application logger that routes immutable records to the
//! console and to an optional asynchronous deferred sink (e.g. a database
//! writer), under a per-instance policy object.
//!
//! ## Features
//!
//! - **Two destinations**: colored console output plus a caller-supplied
//!   deferred sink invoked with ordered record batches
//! - **Lazy batching**: records accumulate in memory and reach the sink in a
//!   single batched flush, explicit or on close
//! - **One dispatch path**: identical semantics behind blocking and
//!   suspend-eligible call forms
//! - **Thread safe**: a logger can be shared freely across threads

pub mod console;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::console::ConsolePrinter;
    pub use crate::core::{
        sink_fn, CallSite, DeferredSink, LogRecord, LogSettings, Logger, LoggerBuilder,
        LoggerError, RecordBuffer, RecordId, RecordIdGenerator, Result, Severity,
    };
}

pub use crate::console::ConsolePrinter;
pub use crate::core::{
    sink_fn, CallSite, DeferredSink, LogRecord, LogSettings, Logger, LoggerBuilder, LoggerError,
    RecordBuffer, RecordId, RecordIdGenerator, Result, Severity,
};
