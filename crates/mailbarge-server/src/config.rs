//! Configuration management for the search proxy

use std::path::PathBuf;

use anyhow::Result;
use mailbarge_common::ZincConfig;

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default index searched on behalf of clients.
pub const DEFAULT_INDEX: &str = "emails";

/// Default corpus root for the folder listing.
pub const DEFAULT_CORPUS_ROOT: &str = "./maildir";

/// Search proxy configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerSettings,
    pub zinc: ZincConfig,
}

/// Listener and corpus settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,

    /// Index queried on behalf of clients
    pub index: String,

    /// Root of the on-disk corpus, used for the folder listing
    pub corpus_root: PathBuf,
}

impl Config {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `MAILBARGE_HOST` / `MAILBARGE_PORT`: listener binding
    /// - `MAILBARGE_INDEX`: destination index name
    /// - `MAILBARGE_ROOT`: corpus root for the folder listing
    /// - plus the `ZINC_*` destination variables (see [`ZincConfig`])
    ///
    /// Fails fast on missing destination credentials: the proxy must not
    /// start without them.
    pub fn load() -> Result<Self> {
        let config = Config {
            server: ServerSettings {
                host: std::env::var("MAILBARGE_HOST")
                    .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: std::env::var("MAILBARGE_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
                index: std::env::var("MAILBARGE_INDEX")
                    .unwrap_or_else(|_| DEFAULT_INDEX.to_string()),
                corpus_root: std::env::var("MAILBARGE_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_ROOT)),
            },
            zinc: ZincConfig::from_env()?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.server.index.is_empty() {
            anyhow::bail!("Index name cannot be empty");
        }

        self.zinc.validate()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = Config {
            server: ServerSettings {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: 0,
                index: DEFAULT_INDEX.to_string(),
                corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
            },
            zinc: ZincConfig {
                base_url: "http://localhost:4080".to_string(),
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_index() {
        let config = Config {
            server: ServerSettings {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                index: String::new(),
                corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
            },
            zinc: ZincConfig {
                base_url: "http://localhost:4080".to_string(),
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }
}
