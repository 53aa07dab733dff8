//! Remote word list endpoint
//!
//! A single GET returning a JSON array of words. No auth, no retry.

use super::{WordListError, WordSource, loader};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Word list served over HTTP
pub struct HttpWordSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpWordSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    /// Source whose requests give up after `timeout`
    #[must_use]
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to a client without request timeout");
                reqwest::blocking::Client::new()
            });

        Self {
            url: url.into(),
            client,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordSource for HttpWordSource {
    fn fetch(&self) -> Result<Vec<String>, WordListError> {
        tracing::debug!(url = %self.url, "requesting word list");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| WordListError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordListError::Request(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .map_err(|e| WordListError::Request(e.to_string()))?;

        let words = loader::parse_json_list(&body)?;
        tracing::debug!(count = words.len(), "word list received");
        Ok(words)
    }

    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }
}
