//! HTTP source backed by a blocking reqwest client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::storage::model::{Input, Snapshot};

use super::{FetchError, PollerConfig, StatsSource};

/// Reads `/stats` and `/inputs` from the agent's HTTP endpoint.
pub struct HttpSource {
    client: Client,
    stats_url: String,
    inputs_url: String,
}

impl HttpSource {
    /// Builds a client with the configured request timeout.
    pub fn new(config: &PollerConfig) -> Result<Self, FetchError> {
        Self::with_urls(config.stats_url(), config.inputs_url(), config.timeout)
    }

    /// Builds a client for explicit endpoint URLs.
    pub fn with_urls(
        stats_url: String,
        inputs_url: String,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Http {
                url: stats_url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            stats_url,
            inputs_url,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self.client.get(url).send().map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;
        trace!("{}: {} bytes", url, body.len());

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl StatsSource for HttpSource {
    fn fetch_stats(&mut self) -> Result<Snapshot, FetchError> {
        self.get_json(&self.stats_url)
    }

    fn fetch_inputs(&mut self) -> Result<Vec<Input>, FetchError> {
        self.get_json(&self.inputs_url)
    }

    fn describe(&self) -> String {
        self.stats_url
            .strip_suffix("/stats")
            .unwrap_or(&self.stats_url)
            .to_string()
    }
}
