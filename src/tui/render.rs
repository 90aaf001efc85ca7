//! Screen layout and frame rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{AppState, Focus, PopupState};
use super::widgets::{
    render_footer, render_harvesters, render_header, render_help, render_input_detail,
    render_input_list, render_inputs, render_modules, render_queue, render_quit_confirm,
    render_system,
};

const SYSTEM_HEIGHT: u16 = 8;
const QUEUE_HEIGHT: u16 = 6;
const HARVESTERS_HEIGHT: u16 = 8;

/// Draws the whole screen from `state`.
///
/// Only reads the cached dashboard; the store is consulted when a snapshot
/// notification arrives, not per frame.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, state);
    render_body(frame, body, state);
    render_footer(frame, footer, state);
    render_popup(frame, area, state);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState) {
    let [left, right] =
        Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]).areas(area);

    let [system, queue, harvesters, _] = Layout::vertical([
        Constraint::Length(SYSTEM_HEIGHT),
        Constraint::Length(QUEUE_HEIGHT),
        Constraint::Length(HARVESTERS_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(left);

    let [inputs, modules] =
        Layout::vertical([Constraint::Fill(2), Constraint::Fill(1)]).areas(right);

    let view = &state.view;
    render_system(frame, system, view, state.focus == Focus::System);
    render_queue(frame, queue, view);
    render_harvesters(frame, harvesters, view);
    render_inputs(frame, inputs, &view.inputs, state.focus == Focus::Inputs);
    render_modules(frame, modules, view);
}

fn render_popup(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::InputList { snapshot, selected } => {
            render_input_list(frame, area, snapshot, *selected)
        }
        PopupState::InputDetail {
            snapshot,
            index,
            scroll,
        } => {
            if let Some(input) = snapshot.inputs().get(*index) {
                render_input_detail(frame, area, input, scroll);
            }
        }
    }
}
