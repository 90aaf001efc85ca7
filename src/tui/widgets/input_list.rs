//! Inputs selection popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::storage::Snapshot;
use crate::tui::style::Styles;
use crate::view::input_list_items;

use super::popup_area;

/// Renders `"{type} ({device})"` per input followed by "Back".
pub fn render_input_list(frame: &mut Frame, area: Rect, snapshot: &Snapshot, selected: usize) {
    let items: Vec<ListItem> = input_list_items(snapshot)
        .into_iter()
        .map(ListItem::new)
        .collect();

    // Border plus one row per item.
    let height = items.len() as u16 + 2;
    let popup_area = popup_area(area, 50, 30, 70, height);
    frame.render_widget(Clear, popup_area);

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Input Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, popup_area, &mut list_state);
}
