//! Log record structure

use super::record_id::RecordId;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged event.
///
/// Identity lives in `id`: two records are equal iff their identifiers are
/// equal; every other field is informational. Records are created by the
/// logger on each call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    /// Formatted descriptor of where/why this record was logged.
    pub trigger: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl LogRecord {
    /// Build a record; the timestamp derives from the identifier.
    pub fn new(
        id: RecordId,
        severity: Severity,
        trigger: String,
        message: String,
        stack: Option<String>,
    ) -> Self {
        Self {
            timestamp: id.timestamp(),
            id,
            severity,
            trigger,
            message,
            stack,
        }
    }

    /// Serialize this record as a JSON object, for sinks that persist JSON.
    pub fn to_json(&self) -> super::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PartialEq for LogRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LogRecord {}

impl std::hash::Hash for LogRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
