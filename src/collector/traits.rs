//! Abstraction over where stats come from, so the poller can run against the
//! real agent or a scripted source in tests.

use crate::storage::model::{Input, Snapshot};

use super::FetchError;

/// Source of agent statistics.
pub trait StatsSource: Send {
    /// Fetches and decodes the `/stats` document.
    ///
    /// The returned snapshot carries a default timestamp; the caller stamps it.
    fn fetch_stats(&mut self) -> Result<Snapshot, FetchError>;

    /// Fetches and decodes the `/inputs` array.
    fn fetch_inputs(&mut self) -> Result<Vec<Input>, FetchError>;

    /// Human-readable description of the source, used in logs and the header.
    fn describe(&self) -> String;
}

impl<S: StatsSource + ?Sized> StatsSource for Box<S> {
    fn fetch_stats(&mut self) -> Result<Snapshot, FetchError> {
        (**self).fetch_stats()
    }

    fn fetch_inputs(&mut self) -> Result<Vec<Input>, FetchError> {
        (**self).fetch_inputs()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
