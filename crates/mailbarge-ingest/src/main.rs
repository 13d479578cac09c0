//! Mailbarge Ingest - bulk email corpus indexer

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use mailbarge_common::logging::{init_logging, LogConfig, LogLevel};
use mailbarge_common::ZincConfig;
use mailbarge_ingest::config::{
    IngestConfig, DEFAULT_BATCH_SIZE, DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS,
};
use mailbarge_ingest::pipeline::IngestPipeline;
use mailbarge_ingest::submitter::BulkSubmitter;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mailbarge-ingest")]
#[command(author, version, about = "Ingest a maildir-style corpus into the indexing service")]
struct Cli {
    /// Root directory of the email corpus
    #[arg(short, long, env = "MAILBARGE_ROOT")]
    root: PathBuf,

    /// Destination index name
    #[arg(short, long, env = "MAILBARGE_INDEX", default_value = "emails")]
    index: String,

    /// Number of concurrent workers
    #[arg(short, long, env = "MAILBARGE_WORKERS", default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Records per submitted batch
    #[arg(short, long, env = "MAILBARGE_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Capacity of the path queue between the walker and the workers
    #[arg(long, env = "MAILBARGE_QUEUE_CAPACITY", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env()?;
    log_config.file_prefix = "mailbarge-ingest".to_string();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    // Destination credentials are required before any processing starts.
    let zinc = ZincConfig::from_env()?;

    let config = IngestConfig {
        root: cli.root,
        index: cli.index,
        workers: cli.workers,
        batch_size: cli.batch_size,
        queue_capacity: cli.queue_capacity,
    };

    let submitter = BulkSubmitter::new(reqwest::Client::new(), zinc, &config.index);
    let pipeline = IngestPipeline::new(config, submitter);

    let start = Instant::now();
    pipeline.run().await?;
    info!(elapsed = ?start.elapsed(), "Ingestion complete");

    Ok(())
}
