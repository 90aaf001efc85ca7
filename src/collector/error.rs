//! Fetch error taxonomy.
//!
//! Every variant is transient: the poller logs it and retries on the next
//! cycle.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, timeout, or any other transport failure.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON document.
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Used by test doubles and non-HTTP sources.
    #[error("{0}")]
    Unavailable(String),
}

impl FetchError {
    /// Returns `true` if the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Http { source, .. } if source.is_timeout())
    }
}
