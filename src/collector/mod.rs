//! Stats collection from the agent's monitoring endpoint.
//!
//! - [`HttpSource`] talks to the real agent over HTTP.
//! - [`mock::MockSource`] replays scripted responses for tests and demo mode.
//! - [`Poller`] drives a source on a fixed interval and publishes into the
//!   shared store.

mod error;
mod http;
pub mod mock;
mod poller;
mod traits;

pub use error::FetchError;
pub use http::HttpSource;
pub use poller::{Poller, SnapshotListener};
pub use traits::StatsSource;

use std::time::Duration;

/// Default agent host.
pub const DEFAULT_HOST: &str = "localhost";
/// Default agent monitoring port.
pub const DEFAULT_PORT: u16 = 5066;
/// Default polling interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how often to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    pub host: String,
    pub port: u16,
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PollerConfig {
    /// `http://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn stats_url(&self) -> String {
        format!("{}/stats", self.base_url())
    }

    pub fn inputs_url(&self) -> String {
        format!("{}/inputs", self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PollerConfig::default();
        assert_eq!(config.stats_url(), "http://localhost:5066/stats");
        assert_eq!(config.inputs_url(), "http://localhost:5066/inputs");
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_custom_endpoint() {
        let config = PollerConfig {
            host: "10.0.0.7".to_string(),
            port: 9000,
            ..PollerConfig::default()
        };
        assert_eq!(config.base_url(), "http://10.0.0.7:9000");
    }
}
