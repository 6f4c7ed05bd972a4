//! Deferred sink trait for batched record persistence

use super::error::Result;
use super::record::LogRecord;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// Destination for batches of records, e.g. a database writer.
///
/// Invoked with single-record batches in immediate mode and with the whole
/// drained buffer on flush. A failure propagates unchanged to whatever awaits
/// the logging or flush call; retry policy belongs to the implementation, not
/// the logger.
///
/// # Example
///
/// ```no_run
/// use sinklog::core::{DeferredSink, LogRecord, Result};
/// use async_trait::async_trait;
///
/// struct DbSink;
///
/// #[async_trait]
/// impl DeferredSink for DbSink {
///     async fn persist(&self, batch: Vec<LogRecord>) -> Result<()> {
///         // Write the batch to the database
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait DeferredSink: Send + Sync {
    /// Persist one ordered batch of records.
    async fn persist(&self, batch: Vec<LogRecord>) -> Result<()>;
}

#[async_trait]
impl<F> DeferredSink for F
where
    F: Fn(Vec<LogRecord>) -> BoxFuture<'static, Result<()>> + Send + Sync,
{
    async fn persist(&self, batch: Vec<LogRecord>) -> Result<()> {
        (self)(batch).await
    }
}

/// Wrap an async closure as a shareable sink.
///
/// # Example
///
/// ```
/// use sinklog::core::sink_fn;
///
/// let sink = sink_fn(|batch| async move {
///     println!("persisting {} records", batch.len());
///     Ok(())
/// });
/// ```
pub fn sink_fn<F, Fut>(f: F) -> Arc<dyn DeferredSink>
where
    F: Fn(Vec<LogRecord>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let boxed = move |batch: Vec<LogRecord>| -> BoxFuture<'static, Result<()>> {
        Box::pin(f(batch))
    };
    Arc::new(boxed)
}
