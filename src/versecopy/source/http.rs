use super::VerseSource;
use crate::error::{Result, VerseError};
use crate::model::{QueryKey, Verse};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://sil-bibles-api.parabible.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct HttpVerseSource {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpVerseSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpVerseSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl VerseSource for HttpVerseSource {
    fn fetch_verses(&self, key: &QueryKey) -> Result<Vec<Verse>> {
        tracing::debug!(url = %self.base_url, reference = %key, "fetching verses");

        let mut response = self
            .agent
            .get(&self.base_url)
            .query("reference", key.as_str())
            .call()
            .map_err(network_error)?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(network_error)?;

        let verses = decode_verses(&body)?;
        tracing::debug!(reference = %key, count = verses.len(), "fetched verses");
        Ok(verses)
    }
}

/// Decodes an API response body into verse records.
pub fn decode_verses(body: &str) -> Result<Vec<Verse>> {
    serde_json::from_str(body).map_err(|e| VerseError::Decode(e.to_string()))
}

fn network_error(error: ureq::Error) -> VerseError {
    match error {
        ureq::Error::StatusCode(status) => {
            VerseError::Network(format!("server responded with HTTP {}", status))
        }
        other => VerseError::Network(other.to_string()),
    }
}
