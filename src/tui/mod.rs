//! Terminal User Interface for beattop.
//!
//! One event channel drives the UI thread. The poller only signals that a
//! snapshot is ready; the UI reads the store itself and redraws.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use event::{Event, EventHandler, Notifier};
pub use state::{AppState, Focus, PopupState};
