//! Bounded window of recent snapshots.

use std::collections::VecDeque;
use std::sync::Arc;

use super::model::Snapshot;

/// Number of snapshots kept in memory.
pub const HISTORY_CAPACITY: usize = 30;

/// FIFO buffer of the most recent snapshots, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Arc<Snapshot>>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl History {
    /// Creates an empty history holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a snapshot, evicting the oldest one when full.
    pub fn push(&mut self, snapshot: Arc<Snapshot>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Snapshot>> {
        self.entries.iter()
    }
}
