//! Left-column panels and the modules list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::tui::style::{Styles, Theme};
use crate::view::DashboardView;

fn panel(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

/// Renders the System panel: one `label value` row per metric.
pub fn render_system(frame: &mut Frame, area: Rect, view: &DashboardView, focused: bool) {
    let lines: Vec<Line> = view
        .system
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", metric.label), Styles::label()),
                Span::styled(metric.value.clone(), Styles::system_value(i)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(panel(" System ", focused));
    frame.render_widget(paragraph, area);
}

/// Renders the Pipeline Queue panel.
pub fn render_queue(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let queue = &view.queue;
    let mut lines = vec![Line::from(vec![
        Span::styled(queue.counts(), Styles::queue()),
        Span::raw(" | "),
        Span::styled(queue.bar.clone(), Styles::queue()),
        Span::styled(queue.track.clone(), Styles::dim()),
    ])];
    if !queue.events.is_empty() {
        lines.push(Line::from(Span::styled(queue.events.clone(), Styles::dim())));
    }

    let paragraph = Paragraph::new(lines).block(panel(" Pipeline Queue ", false));
    frame.render_widget(paragraph, area);
}

/// Renders the Harvesters panel.
pub fn render_harvesters(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        view.harvesters.clone(),
        Styles::default().fg(Theme::HIGHLIGHT_OK),
    )))
    .block(panel(" Harvesters ", false));
    frame.render_widget(paragraph, area);
}

/// Renders the Modules list; each line is colored by its style class.
pub fn render_modules(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let items: Vec<ListItem> = view
        .modules
        .iter()
        .map(|cell| {
            let style = cell.style.map(Styles::from_class).unwrap_or_default();
            ListItem::new(Span::styled(cell.text.clone(), style))
        })
        .collect();

    let list = List::new(items).block(panel(" Modules ", false));
    frame.render_widget(list, area);
}
