//! Scripted stats source for tests and demo mode.
//!
//! Responses are raw JSON bodies decoded the same way the HTTP source decodes
//! them, so tests exercise the real decoding path without a server.

mod scenarios;

use std::collections::VecDeque;

use serde::de::DeserializeOwned;

use crate::storage::model::{Input, Snapshot};

use super::{FetchError, StatsSource};

/// One scripted endpoint response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A 200 response with the given body.
    Json(String),
    /// A transport-level failure.
    Fail(String),
}

/// Stats source that replays scripted responses.
///
/// When a queue runs dry, a synthetic source generates fresh data from the
/// built-in scenario; a scripted-only source fails instead.
#[derive(Debug, Default)]
pub struct MockSource {
    stats: VecDeque<MockResponse>,
    inputs: VecDeque<MockResponse>,
    synthetic: bool,
    cycle: u64,
    stats_calls: usize,
    inputs_calls: usize,
}

impl MockSource {
    /// Creates an empty scripted source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a `/stats` response.
    pub fn push_stats(&mut self, response: MockResponse) -> &mut Self {
        self.stats.push_back(response);
        self
    }

    /// Queues an `/inputs` response.
    pub fn push_inputs(&mut self, response: MockResponse) -> &mut Self {
        self.inputs.push_back(response);
        self
    }

    /// Number of `/stats` fetches served so far.
    pub fn stats_calls(&self) -> usize {
        self.stats_calls
    }

    /// Number of `/inputs` fetches served so far.
    pub fn inputs_calls(&self) -> usize {
        self.inputs_calls
    }

    fn respond<T: DeserializeOwned>(
        response: Option<MockResponse>,
        url: &str,
    ) -> Result<T, FetchError> {
        match response {
            Some(MockResponse::Json(body)) => {
                serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                    url: url.to_string(),
                    source,
                })
            }
            Some(MockResponse::Fail(msg)) => Err(FetchError::Unavailable(msg)),
            None => Err(FetchError::Unavailable(format!(
                "no scripted response for {}",
                url
            ))),
        }
    }
}

impl StatsSource for MockSource {
    fn fetch_stats(&mut self) -> Result<Snapshot, FetchError> {
        self.stats_calls += 1;
        let mut response = self.stats.pop_front();
        if response.is_none() && self.synthetic {
            self.cycle += 1;
            response = Some(MockResponse::Json(scenarios::agent_stats(self.cycle)));
        }
        Self::respond(response, "mock://stats")
    }

    fn fetch_inputs(&mut self) -> Result<Vec<Input>, FetchError> {
        self.inputs_calls += 1;
        let mut response = self.inputs.pop_front();
        if response.is_none() && self.synthetic {
            response = Some(MockResponse::Json(scenarios::agent_inputs(self.cycle)));
        }
        Self::respond(response, "mock://inputs")
    }

    fn describe(&self) -> String {
        if self.synthetic {
            "demo".to_string()
        } else {
            "mock".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_responses_replay_in_order() {
        let mut source = MockSource::new();
        source
            .push_stats(MockResponse::Json(
                r#"{"filebeat": {"harvester": {"running": 1}}}"#.into(),
            ))
            .push_stats(MockResponse::Fail("connection refused".into()));

        let first = source.fetch_stats().unwrap();
        assert_eq!(first.filebeat.harvester.running, 1);

        let err = source.fetch_stats().unwrap_err();
        assert_eq!(err.to_string(), "connection refused");

        assert!(source.fetch_stats().is_err());
        assert_eq!(source.stats_calls(), 3);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let mut source = MockSource::new();
        source.push_inputs(MockResponse::Json("{\"id\":".into()));
        assert!(matches!(
            source.fetch_inputs(),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn test_typical_agent_never_runs_dry() {
        let mut source = MockSource::typical_agent();
        for _ in 0..3 {
            let stats = source.fetch_stats().unwrap();
            assert!(stats.uptime_ms() > 0);
            let inputs = source.fetch_inputs().unwrap();
            assert!(!inputs.is_empty());
        }
        assert_eq!(source.describe(), "demo");
    }
}
