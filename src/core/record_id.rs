//! Time-sortable record identifiers
//!
//! Every logger owns one [`RecordIdGenerator`], seeded once at construction
//! with the wall-clock time and a random salt. Each record receives a fresh
//! identifier derived from that seed plus a sequence number, so identifiers
//! from one logger sort in issue order and the record timestamp falls out of
//! the identifier itself.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique, time-sortable identifier for a single log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId {
    millis: i64,
    salt: u32,
    seq: u64,
}

impl RecordId {
    /// The timestamp component of this identifier.
    pub fn timestamp(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.millis)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Position of this identifier in its generator's issue order.
    pub fn sequence(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fixed-width hex keeps the string form lexicographically sortable.
        write!(f, "{:012x}-{:08x}-{:08x}", self.millis, self.salt, self.seq)
    }
}

/// Issues [`RecordId`]s for one logger instance.
#[derive(Debug)]
pub struct RecordIdGenerator {
    base_millis: i64,
    salt: u32,
    seq: AtomicU64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self {
            base_millis: Utc::now().timestamp_millis(),
            salt: rand::thread_rng().gen(),
            seq: AtomicU64::new(0),
        }
    }

    /// Issue the next identifier.
    pub fn next_id(&self) -> RecordId {
        RecordId {
            millis: self.base_millis,
            salt: self.salt,
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The wall-clock instant this generator was seeded with.
    pub fn base_timestamp(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.base_millis)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
