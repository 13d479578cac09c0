//! Worker pool and pipeline coordination
//!
//! Spawns one walker task and a fixed pool of workers sharing a bounded path
//! queue. Each worker owns a private batch for its entire lifetime; the only
//! resource touched by more than one task is the queue itself.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info, warn};

use crate::batch::Batch;
use crate::config::IngestConfig;
use crate::error::Result;
use crate::parser;
use crate::submitter::BulkSubmitter;
use crate::walker;

/// The concurrent ingestion pipeline.
pub struct IngestPipeline {
    config: IngestConfig,
    submitter: Arc<BulkSubmitter>,
}

/// Per-worker counters, summed for the end-of-run log line.
#[derive(Debug, Default)]
struct WorkerStats {
    indexed: u64,
    skipped: u64,
    submitted_batches: u64,
    failed_batches: u64,
    lost_records: u64,
}

impl WorkerStats {
    fn absorb(&mut self, other: &WorkerStats) {
        self.indexed += other.indexed;
        self.skipped += other.skipped;
        self.submitted_batches += other.submitted_batches;
        self.failed_batches += other.failed_batches;
        self.lost_records += other.lost_records;
    }
}

impl IngestPipeline {
    /// Create a pipeline over a validated-at-run configuration.
    pub fn new(config: IngestConfig, submitter: BulkSubmitter) -> Self {
        Self {
            config,
            submitter: Arc::new(submitter),
        }
    }

    /// Run the pipeline to completion.
    ///
    /// Returns once the walker has exhausted the tree and every worker has
    /// drained the queue and flushed its final partial batch. Per-file and
    /// per-batch failures are logged and never abort the run; only an
    /// invalid configuration fails before processing starts.
    pub async fn run(&self) -> Result<()> {
        self.config.validate()?;

        info!(
            root = %self.config.root.display(),
            index = %self.config.index,
            workers = self.config.workers,
            batch_size = self.config.batch_size,
            "Starting ingestion pipeline"
        );

        let (tx, rx) = mpsc::channel::<PathBuf>(self.config.queue_capacity);
        let rx = Arc::new(Mutex::new(rx));

        let walker_handle = tokio::spawn(walker::walk(self.config.root.clone(), tx));

        let mut worker_handles = Vec::with_capacity(self.config.workers);
        for worker_id in 0..self.config.workers {
            let rx = Arc::clone(&rx);
            let submitter = Arc::clone(&self.submitter);
            let root = self.config.root.clone();
            let batch_size = self.config.batch_size;

            worker_handles.push(tokio::spawn(async move {
                run_worker(worker_id, root, rx, submitter, batch_size).await
            }));
        }

        // The completion barrier: the walker has closed the queue and every
        // worker has exited its loop after its final flush.
        if let Err(err) = walker_handle.await {
            error!(error = %err, "Walker task failed");
        }

        let mut totals = WorkerStats::default();
        for outcome in join_all(worker_handles).await {
            match outcome {
                Ok(stats) => totals.absorb(&stats),
                Err(err) => error!(error = %err, "Worker task failed"),
            }
        }

        info!(
            indexed = totals.indexed,
            skipped = totals.skipped,
            submitted_batches = totals.submitted_batches,
            failed_batches = totals.failed_batches,
            lost_records = totals.lost_records,
            "Ingestion pipeline finished"
        );

        Ok(())
    }
}

/// One worker: pull paths until the queue closes, batching parsed records
/// and flushing at the batch size, then flush the final partial batch.
async fn run_worker(
    worker_id: usize,
    root: PathBuf,
    rx: Arc<Mutex<mpsc::Receiver<PathBuf>>>,
    submitter: Arc<BulkSubmitter>,
    batch_size: usize,
) -> WorkerStats {
    let mut stats = WorkerStats::default();
    let mut batch = Batch::new(batch_size);

    loop {
        // Hold the lock only for the dequeue itself.
        let next = {
            let mut rx = rx.lock().await;
            rx.recv().await
        };
        let Some(path) = next else { break };

        let content = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(worker = worker_id, path = %path.display(), error = %err, "Skipping unreadable file");
                stats.skipped += 1;
                continue;
            }
        };

        let mut record = parser::parse_email(&String::from_utf8_lossy(&content));
        if !record.is_valid() {
            warn!(worker = worker_id, path = %path.display(), "Skipping file with missing Message-ID");
            stats.skipped += 1;
            continue;
        }

        record.folder = folder_for(&root, &path);
        record.normalize_body();

        if batch.push(record) {
            flush(worker_id, &submitter, &mut batch, &mut stats).await;
        }
    }

    // Final partial flush once the queue is closed and drained.
    if !batch.is_empty() {
        flush(worker_id, &submitter, &mut batch, &mut stats).await;
    }

    debug!(
        worker = worker_id,
        indexed = stats.indexed,
        skipped = stats.skipped,
        "Worker finished"
    );
    stats
}

/// Submit the worker's accumulated batch. A failed batch's records are
/// dropped; the worker moves on to its next batch.
async fn flush(
    worker_id: usize,
    submitter: &BulkSubmitter,
    batch: &mut Batch,
    stats: &mut WorkerStats,
) {
    let records = batch.take();
    let count = records.len() as u64;

    match submitter.submit(&records).await {
        Ok(()) => {
            stats.indexed += count;
            stats.submitted_batches += 1;
        }
        Err(err) => {
            stats.failed_batches += 1;
            stats.lost_records += count;
            error!(worker = worker_id, records = count, error = %err, "Batch submission failed; records lost");
        }
    }
}

/// Derive a record's folder: the file's parent directory relative to the
/// walk root, `/`-joined. Files directly under the root get an empty folder.
fn folder_for(root: &Path, path: &Path) -> String {
    path.parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_is_parent_relative_to_root() {
        let root = Path::new("/corpus/maildir");
        let path = Path::new("/corpus/maildir/lay-k/inbox/42.");
        assert_eq!(folder_for(root, path), "lay-k/inbox");
    }

    #[test]
    fn test_folder_empty_for_top_level_files() {
        let root = Path::new("/corpus/maildir");
        let path = Path::new("/corpus/maildir/readme.txt");
        assert_eq!(folder_for(root, path), "");
    }

    #[test]
    fn test_folder_empty_for_foreign_paths() {
        let root = Path::new("/corpus/maildir");
        let path = Path::new("/elsewhere/file");
        assert_eq!(folder_for(root, path), "");
    }
}
