//! Fetch-decode-publish loop.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::storage::{Snapshot, StoreWriter};

use super::{FetchError, StatsSource};

/// Receiver of "new snapshot published" notifications.
pub trait SnapshotListener: Send {
    /// Signals that a new snapshot is available.
    ///
    /// Returns `false` once the listener is gone and polling can stop.
    fn snapshot_ready(&self) -> bool;
}

/// Periodically polls a [`StatsSource`] and publishes snapshots.
///
/// The poller is the only writer of the store. Cycles are strictly
/// sequential; a failed stats fetch leaves the last known snapshot alone.
pub struct Poller<S> {
    source: S,
    store: StoreWriter,
    interval: Duration,
    listener: Option<Box<dyn SnapshotListener>>,
    cycles: u64,
}

impl<S: StatsSource> Poller<S> {
    pub fn new(source: S, store: StoreWriter, interval: Duration) -> Self {
        Self {
            source,
            store,
            interval,
            listener: None,
            cycles: 0,
        }
    }

    /// Attaches the listener notified after every publish.
    pub fn with_listener(mut self, listener: impl SnapshotListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Number of cycles attempted so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one cycle without sleeping.
    ///
    /// A stats failure aborts the cycle and is returned. An inputs failure is
    /// logged and the snapshot is published with the inputs it already had.
    pub fn poll_once(&mut self) -> Result<Arc<Snapshot>, FetchError> {
        self.cycles += 1;
        let started = Instant::now();

        let mut snapshot = self.source.fetch_stats()?;

        match self.source.fetch_inputs() {
            Ok(inputs) => snapshot.filebeat.inputs = inputs,
            Err(e) => warn!("Failed to fetch inputs: {}", e),
        }

        snapshot.timestamp = Local::now();
        let published = self.store.publish(snapshot);

        debug!(
            "Cycle #{}: {} inputs, {} modules ({:.1} ms)",
            self.cycles,
            published.inputs().len(),
            published.modules().len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(published)
    }

    /// Polls forever at the configured interval.
    ///
    /// Returns only when the attached listener has gone away.
    pub fn run(mut self) {
        info!(
            "Polling {} every {}s",
            self.source.describe(),
            self.interval.as_secs_f64()
        );

        loop {
            match self.poll_once() {
                Ok(_) => {
                    if let Some(listener) = &self.listener
                        && !listener.snapshot_ready()
                    {
                        debug!("Listener gone, poller exiting");
                        return;
                    }
                }
                Err(e) if e.is_timeout() => warn!("Stats request timed out: {}", e),
                Err(e) => warn!("Failed to fetch stats: {}", e),
            }

            thread::sleep(self.interval);
        }
    }
}

impl<S: StatsSource + 'static> Poller<S> {
    /// Moves the poller onto its own named thread.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("poller".to_string())
            .spawn(move || self.run())
    }
}
