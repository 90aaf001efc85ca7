//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::popup_area;

const KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Move focus between System and Inputs"),
    ("Enter", "Open the inputs list (Inputs focused)"),
    ("↑ / ↓", "Select or scroll inside popups"),
    ("Enter", "Open details or go back (inputs list)"),
    ("b", "Back to the dashboard (inputs list)"),
    ("Enter / Backspace", "Back to the inputs list (details)"),
    ("Esc", "Close any popup"),
    ("?", "Toggle this help"),
    ("q", "Quit (asks for confirmation)"),
    ("Ctrl-C", "Quit immediately"),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Live view of a log-shipping agent's monitoring endpoint.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    lines.extend(KEYS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("{:<20}", key), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ])
    }));
    lines
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let height = ((u32::from(area.height) * 80 / 100) as u16).clamp(10, 20);
    let popup_area = popup_area(area, 60, 40, 80, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let content = help_lines();
    let visible_height = chunks[0].height as usize;
    let max_scroll = content.len().saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}
