//! TUI widgets for beattop.

mod dashboard;
mod footer;
mod header;
mod help;
mod input_detail;
mod input_list;
mod inputs;
mod quit_confirm;

pub use dashboard::{render_harvesters, render_modules, render_queue, render_system};
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use input_detail::render_input_detail;
pub use input_list::render_input_list;
pub use inputs::render_inputs;
pub use quit_confirm::render_quit_confirm;

use ratatui::layout::Rect;

/// Centered popup area: `width_pct` of the screen width clamped to
/// `min_w..=max_w`, and `height` rows capped by the screen.
pub(crate) fn popup_area(area: Rect, width_pct: u16, min_w: u16, max_w: u16, height: u16) -> Rect {
    let width = ((u32::from(area.width) * u32::from(width_pct) / 100) as u16)
        .clamp(min_w, max_w)
        .min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
