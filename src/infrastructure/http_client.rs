//! HTTP transport for listing, search and detail pages
//!
//! A single blocking `reqwest` client is built from `HttpClientConfig` and
//! reused for every request of a run (connection pooling, cookies, default
//! headers). It is never mutated after construction.

use crate::domain::constants::site::BROWSER_USER_AGENT;
use crate::infrastructure::scraping_error::FetchError;
use reqwest::blocking::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

/// Fetches raw response bodies
pub trait Transport {
    /// GET `url` with optional query parameters. Non-2xx statuses are errors.
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url, query)
    }
}

/// Configuration for HTTP client behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: BROWSER_USER_AGENT.to_string(),
            follow_redirects: true,
        }
    }
}

/// Blocking HTTP client with browser-like default headers
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| {
                FetchError::network("<client>", format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl Transport for HttpClient {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        info!("🌐 HTTP GET: {}", url);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ HTTP error {}: {}", status, url);
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response.bytes().map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_browser_agent() {
        let config = HttpClientConfig::default();
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 5,
            user_agent: "Test Agent".to_string(),
            follow_redirects: false,
        };

        let client = HttpClient::with_config(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
