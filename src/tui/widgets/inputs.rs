//! Inputs table widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Row, Table};

use crate::tui::style::Styles;
use crate::view::common::TableViewModel;

/// Renders the inputs table, one row per input in list order.
pub fn render_inputs(frame: &mut Frame, area: Rect, vm: &TableViewModel, focused: bool) {
    let header_cells: Vec<Span> = vm
        .headers
        .iter()
        .map(|h| Span::styled(h.clone(), Styles::table_header()))
        .collect();
    let header = Row::new(header_cells).style(Styles::table_header());

    let widths: Vec<Constraint> = vm.widths.iter().map(|&w| Constraint::Length(w)).collect();

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let style = Styles::from_class(vr.style);
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells).style(style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} ", vm.title))
                .borders(Borders::ALL)
                .border_style(Styles::border(focused)),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}
