//! Batch accumulation
//!
//! A batch is owned by exactly one worker for its entire lifetime and is
//! never shared or merged across workers; correctness needs no locking.

use mailbarge_common::EmailRecord;

/// An ordered, append-only group of records bounded by a configured size.
#[derive(Debug)]
pub struct Batch {
    records: Vec<EmailRecord>,
    capacity: usize,
}

impl Batch {
    /// Create an empty batch that seals at `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record. Returns `true` once the batch has reached capacity
    /// and must be submitted.
    pub fn push(&mut self, record: EmailRecord) -> bool {
        self.records.push(record);
        self.records.len() >= self.capacity
    }

    /// Number of accumulated records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drain the accumulated records in append order, leaving the batch
    /// empty for reuse.
    pub fn take(&mut self) -> Vec<EmailRecord> {
        std::mem::replace(&mut self.records, Vec::with_capacity(self.capacity))
    }
}
