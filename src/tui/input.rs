//! Input handling and keybindings.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, Focus, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match state.popup {
        PopupState::None => handle_main(state, key),
        PopupState::QuitConfirm => handle_quit_confirm(state, key),
        PopupState::Help { .. } => {
            handle_help(state, key);
            KeyAction::None
        }
        PopupState::InputList { .. } => {
            handle_input_list(state, key);
            KeyAction::None
        }
        PopupState::InputDetail { .. } => {
            handle_input_detail(state, key);
            KeyAction::None
        }
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.close_popup();
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.close_popup();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys on the main screen.
fn handle_main(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.popup = PopupState::Help { scroll: 0 };
        }
        KeyCode::Tab => state.focus = state.focus.next(),
        KeyCode::BackTab => state.focus = state.focus.prev(),
        KeyCode::Enter if state.focus == Focus::Inputs => {
            state.open_input_list();
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_help(state: &mut AppState, key: KeyEvent) {
    let PopupState::Help { scroll } = &mut state.popup else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('H') => state.close_popup(),
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        // Clamped against content height when rendered.
        KeyCode::Down | KeyCode::Char('j') => *scroll += 1,
        _ => {}
    }
}

fn handle_input_list(state: &mut AppState, key: KeyEvent) {
    let len = state.input_list_len();
    let PopupState::InputList { snapshot, selected } = &mut state.popup else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => state.close_popup(),
        KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + 1 < len {
                *selected += 1;
            }
        }
        KeyCode::Enter => {
            // The last entry is "Back".
            if *selected >= snapshot.inputs().len() {
                state.close_popup();
            } else {
                state.popup = PopupState::InputDetail {
                    snapshot: Arc::clone(snapshot),
                    index: *selected,
                    scroll: 0,
                };
            }
        }
        _ => {}
    }
}

fn handle_input_detail(state: &mut AppState, key: KeyEvent) {
    let PopupState::InputDetail {
        snapshot,
        index,
        scroll,
    } = &mut state.popup
    else {
        return;
    };
    match key.code {
        KeyCode::Esc => state.close_popup(),
        KeyCode::Enter | KeyCode::Backspace => {
            state.popup = PopupState::InputList {
                snapshot: Arc::clone(snapshot),
                selected: *index,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll += 1,
        _ => {}
    }
}
