//! Application state management.

use std::sync::Arc;

use crate::storage::Snapshot;
use crate::view::{DashboardView, input_list_items};

/// Main-screen panel that owns keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    System,
    Inputs,
}

impl Focus {
    /// Returns next panel (wraps around).
    pub fn next(self) -> Self {
        match self {
            Focus::System => Focus::Inputs,
            Focus::Inputs => Focus::System,
        }
    }

    /// Returns previous panel (wraps around).
    pub fn prev(self) -> Self {
        // Two panels: previous and next coincide.
        self.next()
    }
}

/// Modal overlay on top of the main screen.
///
/// List and detail popups hold the snapshot they were opened on, so a
/// refresh underneath never shifts the selection.
#[derive(Debug, Clone, Default)]
pub enum PopupState {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    QuitConfirm,
    InputList {
        snapshot: Arc<Snapshot>,
        selected: usize,
    },
    InputDetail {
        snapshot: Arc<Snapshot>,
        index: usize,
        scroll: usize,
    },
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    pub focus: Focus,
    pub popup: PopupState,
    /// Last snapshot read from the store.
    pub snapshot: Option<Arc<Snapshot>>,
    /// Dashboard built from `snapshot`, rebuilt on every refresh.
    pub view: DashboardView,
    /// Agent endpoint shown in the header.
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: String) -> Self {
        Self {
            focus: Focus::default(),
            popup: PopupState::None,
            snapshot: None,
            view: DashboardView::from_snapshot(None),
            endpoint,
        }
    }

    /// Replaces the displayed snapshot and rebuilds the dashboard.
    ///
    /// `None` keeps the previous snapshot: the display only ever moves
    /// forward.
    pub fn apply_snapshot(&mut self, snapshot: Option<Arc<Snapshot>>) {
        if let Some(snap) = snapshot {
            self.view = DashboardView::from_snapshot(Some(&snap));
            self.snapshot = Some(snap);
        }
    }

    /// Opens the inputs list on the current snapshot, if it has any inputs.
    pub fn open_input_list(&mut self) -> bool {
        match &self.snapshot {
            Some(snap) if !snap.inputs().is_empty() => {
                self.popup = PopupState::InputList {
                    snapshot: Arc::clone(snap),
                    selected: 0,
                };
                true
            }
            _ => false,
        }
    }

    /// Number of entries in the open inputs list, including "Back".
    pub fn input_list_len(&self) -> usize {
        match &self.popup {
            PopupState::InputList { snapshot, .. } => input_list_items(snapshot).len(),
            _ => 0,
        }
    }

    pub fn close_popup(&mut self) {
        self.popup = PopupState::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::model::Input;

    fn snapshot_with_inputs(n: usize) -> Arc<Snapshot> {
        let mut snap = Snapshot::default();
        snap.filebeat.inputs = (0..n)
            .map(|i| Input {
                id: format!("input-{}", i),
                ..Input::default()
            })
            .collect();
        Arc::new(snap)
    }

    #[test]
    fn test_new_state_shows_placeholder() {
        let state = AppState::new("http://localhost:5066".to_string());
        assert!(state.snapshot.is_none());
        assert_eq!(state.view, DashboardView::from_snapshot(None));
        assert_eq!(state.focus, Focus::System);
    }

    #[test]
    fn test_apply_none_keeps_previous() {
        let mut state = AppState::new(String::new());
        let snap = snapshot_with_inputs(1);
        state.apply_snapshot(Some(Arc::clone(&snap)));
        state.apply_snapshot(None);

        assert!(Arc::ptr_eq(state.snapshot.as_ref().unwrap(), &snap));
        assert_eq!(state.view.inputs.rows.len(), 1);
    }

    #[test]
    fn test_open_input_list_requires_inputs() {
        let mut state = AppState::new(String::new());
        assert!(!state.open_input_list());

        state.apply_snapshot(Some(snapshot_with_inputs(0)));
        assert!(!state.open_input_list());

        state.apply_snapshot(Some(snapshot_with_inputs(2)));
        assert!(state.open_input_list());
        assert_eq!(state.input_list_len(), 3);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::System.next(), Focus::Inputs);
        assert_eq!(Focus::Inputs.next(), Focus::System);
        assert_eq!(Focus::System.prev(), Focus::Inputs);
    }
}
