//! Per-input metrics popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::storage::model::Input;
use crate::tui::style::Styles;
use crate::view::InputDetail;
use crate::view::inputs::DetailLine;

fn to_line(line: &DetailLine) -> Line<'static> {
    match line {
        DetailLine::Field { label, value } => Line::from(vec![
            Span::styled(format!("{:<10}", label), Styles::label()),
            Span::styled(value.clone(), Style::default().fg(Color::Cyan)),
        ]),
        DetailLine::Section(title) => Line::from(Span::styled(*title, Styles::section_header())),
        DetailLine::Text(text) => Line::from(text.clone()),
        DetailLine::Blank => Line::from(""),
    }
}

/// Renders the detail panel for `input` with scroll support.
pub fn render_input_detail(frame: &mut Frame, area: Rect, input: &Input, scroll: &mut usize) {
    let detail = InputDetail::new(input);
    let lines: Vec<Line> = detail.lines.iter().map(to_line).collect();

    let popup_area = super::popup_area(area, 70, 40, 100, area.height.saturating_sub(4));
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(detail.title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let visible_height = block.inner(popup_area).height as usize;

    let max_scroll = lines.len().saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, popup_area);
}
