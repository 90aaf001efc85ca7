//! Main TUI application.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::storage::StoreReader;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    store: StoreReader,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates the application; `endpoint` is shown in the header.
    pub fn new(store: StoreReader, endpoint: String) -> Self {
        Self {
            store,
            state: AppState::new(endpoint),
            should_quit: false,
        }
    }

    /// Runs the TUI application until quit, shutdown or channel close.
    pub fn run(mut self, events: EventHandler) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(event) => self.handle_event(event),
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Applies one event to the application state.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::SnapshotReady => self.refresh(),
            Event::Key(key) => {
                if handle_key(&mut self.state, key) == KeyAction::Quit {
                    info!("quit requested");
                    self.should_quit = true;
                }
            }
            // Redrawn at the top of the loop from cached state.
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            Event::Shutdown => {
                info!("shutdown signal received");
                self.should_quit = true;
            }
        }
    }

    /// Pulls the newest snapshot from the store.
    fn refresh(&mut self) {
        self.state.apply_snapshot(self.store.latest());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::SnapshotListener;
    use crate::storage::{Snapshot, StoreWriter};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_snapshot_ready_refreshes_from_store() {
        let writer = StoreWriter::new();
        let mut app = App::new(writer.reader(), String::new());

        let mut snap = Snapshot::default();
        snap.filebeat.harvester.running = 4;
        writer.publish(snap);

        // Nothing shown until notified.
        assert!(app.state.snapshot.is_none());

        app.handle_event(Event::SnapshotReady);
        assert_eq!(app.state.view.harvesters, "Active: 4 | Open Files: 0");
    }

    #[test]
    fn test_quit_flow() {
        let writer = StoreWriter::new();
        let mut app = App::new(writer.reader(), String::new());

        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_event(key(KeyCode::Char('n')));
        assert!(!app.should_quit);

        app.handle_event(key(KeyCode::Char('q')));
        app.handle_event(key(KeyCode::Enter));
        assert!(app.should_quit);
    }

    #[test]
    fn test_event_loop_exits_on_shutdown() {
        let writer = StoreWriter::new();
        let mut app = App::new(writer.reader(), "http://localhost:5066".to_string());
        let events = EventHandler::detached();

        writer.publish(Snapshot::default());
        assert!(events.notifier().snapshot_ready());
        events.sender().send(Event::Resize(80, 24)).unwrap();
        events.sender().send(Event::Shutdown).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        app.event_loop(&mut terminal, &events).unwrap();

        assert!(app.should_quit);
        assert!(app.state.snapshot.is_some());
    }
}
