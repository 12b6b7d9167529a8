//! HTTP session for fetching article pages.
//!
//! A single [`Session`] wraps one reqwest client that is reused for every
//! request in a batch, with a fixed timeout and an identifying User-Agent.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::{AnthologyError, Result};

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// A reusable HTTP session.
///
/// Built once per batch so connection pooling and default headers carry
/// across all fetches.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
}

impl Session {
    /// Builds the client with the configured timeout and User-Agent.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a page body.
    ///
    /// Every transport-level failure (invalid URL, connection error,
    /// timeout, non-200 status) maps to [`AnthologyError::FetchFailed`] so
    /// the caller treats all of them uniformly as "skip this entry".
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        Url::parse(url).map_err(|e| AnthologyError::FetchFailed {
            url: url.to_string(),
            reason: format!("invalid URL: {e}"),
        })?;

        let response = self.client.get(url).send().await.map_err(|e| AnthologyError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AnthologyError::FetchFailed {
                url: url.to_string(),
                reason: format!("status {status}"),
            });
        }

        response.text().await.map_err(|e| AnthologyError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_session_builds() {
        assert!(Session::new(&FetchConfig::default()).is_ok());
    }

    #[test]
    fn test_fetch_page_invalid_url() {
        let session = Session::new(&FetchConfig::default()).unwrap();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(session.fetch_page("not-a-url"))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(AnthologyError::FetchFailed { .. })));
    }
}
