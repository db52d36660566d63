//! HTTP client for the shortener service.

use crate::api::dto::{ShortenRequest, ShortenResponse};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Backend that turns a long URL into a short code.
///
/// # Implementations
///
/// - [`ShortenerClient`] - HTTP implementation against the real service
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenBackend: Send + Sync {
    /// Submits a URL for shortening.
    ///
    /// Returns the short code on success, `None` on any kind of failure:
    /// the service rejecting the URL, an unreachable endpoint, or an
    /// undecodable response. Callers cannot distinguish these cases.
    async fn shorten(&self, original_url: &str) -> Option<String>;
}

/// Reqwest-backed client posting to `POST <API_DOMAIN>/api/v1/shortener`.
///
/// No retries and no request timeout: one attempt per user action, and
/// the outcome is either a short code or nothing.
#[derive(Clone)]
pub struct ShortenerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ShortenerClient {
    /// Creates a client for the service at `api_domain`.
    pub fn new(api_domain: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/v1/shortener", api_domain.trim_end_matches('/')),
        }
    }

    /// The full endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ShortenBackend for ShortenerClient {
    async fn shorten(&self, original_url: &str) -> Option<String> {
        debug!("submitting {} to {}", original_url, self.endpoint);

        let response = match self
            .http
            .post(&self.endpoint)
            .json(&ShortenRequest {
                original_url: original_url.to_string(),
            })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("shorten request failed: {e}");
                return None;
            }
        };

        // The status code is not consulted: error responses simply lack
        // a `newUrl` field and fall out as None below.
        let body: ShortenResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("failed to decode shortener response: {e}");
                return None;
            }
        };

        body.new_url.filter(|code| !code.is_empty())
    }
}
