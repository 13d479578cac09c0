//! Mailbarge Common Library
//!
//! Shared functionality for the mailbarge workspace members:
//!
//! - **Types**: the `EmailRecord` domain type and whitespace normalization
//! - **Zinc**: destination service configuration and endpoint URL builders
//! - **Logging**: tracing-based logging bootstrap
//!
//! # Example
//!
//! ```no_run
//! use mailbarge_common::{EmailRecord, ZincConfig};
//!
//! fn check(record: &EmailRecord) -> anyhow::Result<()> {
//!     let zinc = ZincConfig::from_env()?;
//!     if record.is_valid() {
//!         println!("{} -> {}", record.message_id, zinc.base_url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod types;
pub mod zinc;

// Re-export commonly used types
pub use types::EmailRecord;
pub use zinc::ZincConfig;
