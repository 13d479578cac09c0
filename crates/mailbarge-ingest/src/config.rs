//! Ingestion pipeline configuration

use std::path::PathBuf;

use crate::error::{IngestError, Result};

// ============================================================================
// Pipeline Configuration Constants
// ============================================================================

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 8;

/// Default number of records per submitted batch.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Default capacity of the path queue between the walker and the workers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Tunable parameters of the ingestion pipeline
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Root directory of the email corpus
    pub root: PathBuf,

    /// Destination index name
    pub index: String,

    /// Number of concurrent workers pulling from the path queue
    pub workers: usize,

    /// Records per batch; a batch is sealed and submitted at this size
    pub batch_size: usize,

    /// Bounded capacity of the walker-to-worker path queue
    pub queue_capacity: usize,
}

impl IngestConfig {
    /// Create a configuration with default concurrency settings
    pub fn new(root: impl Into<PathBuf>, index: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index: index.into(),
            workers: DEFAULT_WORKERS,
            batch_size: DEFAULT_BATCH_SIZE,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Validate the configuration.
    ///
    /// Called before any processing starts; the pipeline must not begin
    /// without a usable configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(IngestError::config(format!(
                "Corpus root '{}' is not a readable directory",
                self.root.display()
            )));
        }

        if self.index.is_empty() {
            return Err(IngestError::config("Index name cannot be empty"));
        }

        if self.workers == 0 {
            return Err(IngestError::config("Worker count must be greater than 0"));
        }

        if self.batch_size == 0 {
            return Err(IngestError::config("Batch size must be greater than 0"));
        }

        if self.queue_capacity == 0 {
            return Err(IngestError::config(
                "Queue capacity must be greater than 0",
            ));
        }

        Ok(())
    }
}
