//! Core logger types and traits

pub mod buffer;
pub mod call_site;
pub mod error;
pub mod logger;
pub mod record;
pub mod record_id;
pub mod settings;
pub mod severity;
pub mod sink;

pub use buffer::RecordBuffer;
pub use call_site::CallSite;
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;
pub use record_id::{RecordId, RecordIdGenerator};
pub use settings::LogSettings;
pub use severity::Severity;
pub use sink::{sink_fn, DeferredSink};
