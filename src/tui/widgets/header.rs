//! Header bar: capture time, application name and agent endpoint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let endpoint = format!(" {} ", state.endpoint);
    let chunks = Layout::horizontal([
        Constraint::Length(21), // Time
        Constraint::Min(20),    // Title
        Constraint::Length(endpoint.chars().count() as u16),
    ])
    .split(area);

    let time_str = state
        .snapshot
        .as_ref()
        .map(|s| s.timestamp.format(" %Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| " ----".to_string());
    let time = Paragraph::new(time_str).style(Styles::header());
    frame.render_widget(time, chunks[0]);

    let title = Paragraph::new(format!("BEATTOP v{}", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center)
        .style(Styles::header());
    frame.render_widget(title, chunks[1]);

    let endpoint = Paragraph::new(endpoint)
        .alignment(Alignment::Right)
        .style(Styles::header());
    frame.render_widget(endpoint, chunks[2]);
}
