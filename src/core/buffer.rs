//! Pending-record buffer for lazy batching

use super::record::LogRecord;
use parking_lot::Mutex;

/// Ordered queue of records awaiting a batched flush.
///
/// Append and drain serialize on one mutex, so a drain hands back an exact
/// snapshot in enqueue order and leaves the buffer empty; records enqueued
/// concurrently land either in the snapshot or in the next one, never both.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    inner: Mutex<Vec<LogRecord>>,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Capacity is a hint only; growth is unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn push(&self, record: LogRecord) {
        self.inner.lock().push(record);
    }

    /// Atomically snapshot and clear the contents.
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.inner.lock())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
