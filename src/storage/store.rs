//! Shared "last known snapshot" cell.
//!
//! The poller owns the only [`StoreWriter`]; the renderer holds cloned
//! [`StoreReader`] handles. Both sides go through one `RwLock` so the history
//! append and the last-known swap are observed together.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::history::History;
use super::model::Snapshot;

#[derive(Debug, Default)]
struct StoreInner {
    latest: Option<Arc<Snapshot>>,
    history: History,
}

/// Write side of the store. Not `Clone`: there is a single writer.
#[derive(Debug)]
pub struct StoreWriter {
    inner: Arc<RwLock<StoreInner>>,
}

impl Default for StoreWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreWriter {
    /// Creates an empty store with the default history capacity.
    pub fn new() -> Self {
        Self::with_history(History::default())
    }

    /// Creates an empty store around the given history buffer.
    pub fn with_history(history: History) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                latest: None,
                history,
            })),
        }
    }

    /// Appends the snapshot to history and makes it the last known one.
    pub fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        let mut inner = self.write();
        inner.history.push(Arc::clone(&snapshot));
        inner.latest = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Returns a new reader bound to the same store.
    pub fn reader(&self) -> StoreReader {
        StoreReader {
            inner: Arc::clone(&self.inner),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Read-only handle to the store.
#[derive(Debug, Clone)]
pub struct StoreReader {
    inner: Arc<RwLock<StoreInner>>,
}

impl StoreReader {
    /// Last successfully fetched snapshot, if any.
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.read().latest.clone()
    }

    /// Copy of the history window, oldest first.
    pub fn history(&self) -> Vec<Arc<Snapshot>> {
        self.read().history.iter().cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.read().history.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn snapshot(running: u64) -> Snapshot {
        let mut snap = Snapshot::default();
        snap.filebeat.harvester.running = running;
        snap
    }

    #[test]
    fn test_store_starts_empty() {
        let reader = StoreWriter::new().reader();
        assert!(reader.latest().is_none());
        assert_eq!(reader.history_len(), 0);
    }

    #[test]
    fn test_publish_replaces_latest_and_appends_history() {
        let writer = StoreWriter::new();
        let reader = writer.reader();

        let first = writer.publish(snapshot(1));
        assert!(Arc::ptr_eq(&reader.latest().unwrap(), &first));

        let second = writer.publish(snapshot(2));
        let latest = reader.latest().unwrap();
        assert!(Arc::ptr_eq(&latest, &second));
        assert_eq!(latest.filebeat.harvester.running, 2);

        let history = reader.history();
        assert_eq!(history.len(), 2);
        assert!(Arc::ptr_eq(&history[0], &first));
    }

    #[test]
    fn test_history_is_bounded_through_store() {
        let writer = StoreWriter::with_history(History::new(5));
        let reader = writer.reader();
        for i in 0..12 {
            writer.publish(snapshot(i));
        }
        assert_eq!(reader.history_len(), 5);
        assert_eq!(reader.latest().unwrap().filebeat.harvester.running, 11);
        assert_eq!(reader.history()[0].filebeat.harvester.running, 7);
    }

    #[test]
    fn test_reader_observes_writes_from_other_thread() {
        let writer = StoreWriter::new();
        let reader = writer.reader();
        let handle = thread::spawn(move || {
            for i in 0..50 {
                writer.publish(snapshot(i));
            }
        });
        handle.join().unwrap();

        assert_eq!(reader.latest().unwrap().filebeat.harvester.running, 49);
        assert_eq!(reader.history_len(), 30);
    }
}
