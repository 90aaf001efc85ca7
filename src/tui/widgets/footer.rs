//! Footer line with context-dependent key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Focus, PopupState};
use crate::tui::style::Styles;

fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match state.popup {
        PopupState::None if state.focus == Focus::Inputs => &[
            ("Tab", "focus"),
            ("Enter", "inputs"),
            ("?", "help"),
            ("q", "quit"),
        ],
        PopupState::None => &[("Tab", "focus"), ("?", "help"), ("q", "quit")],
        PopupState::Help { .. } => &[("↑/↓", "scroll"), ("?/Esc", "close")],
        PopupState::QuitConfirm => &[("Enter/q", "quit"), ("Esc/n", "cancel")],
        PopupState::InputList { .. } => &[
            ("↑/↓", "select"),
            ("Enter", "open"),
            ("b", "back"),
            ("Esc", "main"),
        ],
        PopupState::InputDetail { .. } => &[
            ("↑/↓", "scroll"),
            ("Enter/Bksp", "list"),
            ("Esc", "main"),
        ],
    }
}

/// Renders the footer.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = hints(state)
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(" {} ", action), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
