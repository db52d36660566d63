//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any
//! request is made.
//!
//! ## Required Variables
//!
//! - `API_DOMAIN` - Base URL of the shortener service
//!   (e.g. `https://s.example.com`)
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Public base short links are displayed under
//!   (default: `API_DOMAIN` with a trailing `/`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortener service.
    pub api_domain: String,
    /// Public base the short code is appended to for display.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_DOMAIN` is not set.
    pub fn from_env() -> Result<Self> {
        let api_domain = env::var("API_DOMAIN").context("API_DOMAIN must be set")?;

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| default_base_url(&api_domain));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_domain,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `API_DOMAIN` is not an absolute HTTP(S) URL
    /// - `BASE_URL` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.api_domain)
            .with_context(|| format!("API_DOMAIN is not a valid URL: '{}'", self.api_domain))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "API_DOMAIN must use http or https, got '{}'",
                parsed.scheme()
            );
        }

        if self.base_url.is_empty() {
            anyhow::bail!("BASE_URL must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service: {}", self.api_domain);
        tracing::info!("  Display base: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Default display base: the service address with a trailing `/` ensured.
fn default_base_url(api_domain: &str) -> String {
    if api_domain.ends_with('/') {
        api_domain.to_string()
    } else {
        format!("{api_domain}/")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
