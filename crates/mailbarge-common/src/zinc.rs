//! Destination service configuration and endpoint URL builders
//!
//! The indexing service speaks a ZincSearch-compatible HTTP API. Credentials
//! are never hardcoded; they come from the environment at startup.

use anyhow::{Context, Result};

// ============================================================================
// Destination Configuration Constants
// ============================================================================

/// Default destination URL for local development.
pub const DEFAULT_ZINC_URL: &str = "http://localhost:4080";

/// Connection settings for the indexing service.
#[derive(Debug, Clone)]
pub struct ZincConfig {
    /// Base URL of the service, e.g. `http://localhost:4080`
    pub base_url: String,

    /// Basic-auth user name
    pub username: String,

    /// Basic-auth password
    pub password: String,
}

impl ZincConfig {
    /// Load destination settings from the environment.
    ///
    /// Environment variables:
    /// - `ZINC_SEARCH_URL`: base URL (defaults to `http://localhost:4080`)
    /// - `ZINC_FIRST_ADMIN_USER`: basic-auth user (required)
    /// - `ZINC_FIRST_ADMIN_PASSWORD`: basic-auth password (required)
    ///
    /// Missing credentials are a fatal configuration error: no pipeline or
    /// server may start without them.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ZINC_SEARCH_URL")
            .unwrap_or_else(|_| DEFAULT_ZINC_URL.to_string());

        let username = std::env::var("ZINC_FIRST_ADMIN_USER")
            .context("ZINC_FIRST_ADMIN_USER is not set; destination credentials are required")?;

        let password = std::env::var("ZINC_FIRST_ADMIN_PASSWORD").context(
            "ZINC_FIRST_ADMIN_PASSWORD is not set; destination credentials are required",
        )?;

        let config = Self {
            base_url,
            username,
            password,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate destination settings.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("Destination URL cannot be empty");
        }

        if self.username.is_empty() || self.password.is_empty() {
            anyhow::bail!("Destination credentials cannot be empty");
        }

        Ok(())
    }
}

/// Build the bulk-write URL for an index.
///
/// The payload carries empty `{"index": {}}` action descriptors, so the
/// target index rides in the URL.
pub fn bulk_url(base_url: &str, index: &str) -> String {
    format!("{}/api/{}/_bulk", base_url, index)
}

/// Build the single-document write URL for an index.
pub fn doc_url(base_url: &str, index: &str) -> String {
    format!("{}/api/{}/_doc", base_url, index)
}

/// Build the search URL for an index.
pub fn search_url(base_url: &str, index: &str) -> String {
    format!("{}/api/{}/_search", base_url, index)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            bulk_url("http://localhost:4080", "emails"),
            "http://localhost:4080/api/emails/_bulk"
        );
        assert_eq!(
            doc_url("http://localhost:4080", "emails"),
            "http://localhost:4080/api/emails/_doc"
        );
        assert_eq!(
            search_url("http://localhost:4080", "emails"),
            "http://localhost:4080/api/emails/_search"
        );
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        let config = ZincConfig {
            base_url: DEFAULT_ZINC_URL.to_string(),
            username: String::new(),
            password: "admin123".to_string(),
        };
        assert!(config.validate().is_err());

        let config = ZincConfig {
            base_url: String::new(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
