//! Mailbarge Ingest Library
//!
//! The concurrent ingestion-and-batch-submission pipeline: directory
//! traversal, header/body parsing, worker-pool fan-out, batch accumulation,
//! and bulk submission with backpressure.
//!
//! # Data flow
//!
//! ```text
//! walker --(bounded path channel)--> N workers, each:
//!     read file -> parse -> validate -> batch -> (on threshold or drain)
//!     -> bulk submit -> indexing service
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mailbarge_common::ZincConfig;
//! use mailbarge_ingest::{
//!     config::IngestConfig, pipeline::IngestPipeline, submitter::BulkSubmitter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let zinc = ZincConfig::from_env()?;
//!     let config = IngestConfig::new("./maildir", "emails");
//!     let submitter = BulkSubmitter::new(reqwest::Client::new(), zinc, &config.index);
//!     IngestPipeline::new(config, submitter).run().await?;
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod submitter;
pub mod walker;

// Re-export commonly used types
pub use error::{IngestError, Result};
