//! Event handling for TUI.
//!
//! All UI input arrives on one channel: terminal events from a reader thread,
//! snapshot notifications from the poller, and shutdown requests from the
//! signal handler. Snapshot notifications coalesce: at most one is pending.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::collector::SnapshotListener;

/// How long the reader thread blocks on terminal input per poll.
const INPUT_POLL: Duration = Duration::from_millis(250);

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new snapshot was published.
    SnapshotReady,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
    /// Interrupt or termination signal.
    Shutdown,
}

/// Single consumer of all application events.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
    pending: Arc<AtomicBool>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    /// Creates the handler and starts the terminal reader thread.
    pub fn new() -> Self {
        let handler = Self::detached();
        let event_tx = handler.tx.clone();

        thread::spawn(move || {
            loop {
                match event::poll(INPUT_POLL) {
                    Ok(true) => {
                        let event = match event::read() {
                            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                            Ok(_) => continue,
                            Err(_) => break,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        handler
    }

    /// Creates the handler without a terminal reader.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            tx,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the poller-side handle for snapshot notifications.
    pub fn notifier(&self) -> Notifier {
        Notifier {
            tx: self.tx.clone(),
            pending: Arc::clone(&self.pending),
        }
    }

    /// Returns a raw sender, used by the signal handler.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        let event = self.rx.recv()?;
        if event == Event::SnapshotReady {
            self.pending.store(false, Ordering::SeqCst);
        }
        Ok(event)
    }

    /// Receives the next event if one is queued.
    #[cfg(test)]
    fn try_next(&self) -> Option<Event> {
        let event = self.rx.try_recv().ok()?;
        if event == Event::SnapshotReady {
            self.pending.store(false, Ordering::SeqCst);
        }
        Some(event)
    }
}

/// Poller-side sender of [`Event::SnapshotReady`].
#[derive(Clone)]
pub struct Notifier {
    tx: Sender<Event>,
    pending: Arc<AtomicBool>,
}

impl SnapshotListener for Notifier {
    fn snapshot_ready(&self) -> bool {
        if self.pending.swap(true, Ordering::SeqCst) {
            // Already queued; the UI will read the newest snapshot anyway.
            return true;
        }
        self.tx.send(Event::SnapshotReady).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_coalesce_until_consumed() {
        let events = EventHandler::detached();
        let notifier = events.notifier();

        assert!(notifier.snapshot_ready());
        assert!(notifier.snapshot_ready());
        assert!(notifier.snapshot_ready());

        assert_eq!(events.try_next(), Some(Event::SnapshotReady));
        assert_eq!(events.try_next(), None);

        assert!(notifier.snapshot_ready());
        assert_eq!(events.try_next(), Some(Event::SnapshotReady));
    }

    #[test]
    fn test_other_events_are_not_coalesced() {
        let events = EventHandler::detached();
        let tx = events.sender();
        tx.send(Event::Resize(80, 24)).unwrap();
        tx.send(Event::Resize(100, 30)).unwrap();
        tx.send(Event::Shutdown).unwrap();

        assert_eq!(events.next().unwrap(), Event::Resize(80, 24));
        assert_eq!(events.next().unwrap(), Event::Resize(100, 30));
        assert_eq!(events.next().unwrap(), Event::Shutdown);
    }

    #[test]
    fn test_notifier_reports_disconnect() {
        let events = EventHandler::detached();
        let notifier = events.notifier();
        drop(events);
        assert!(!notifier.snapshot_ready());
    }
}
