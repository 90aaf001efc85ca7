//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::common::RowStyleClass;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Highlight colors
    pub const HIGHLIGHT_OK: Color = Color::Green;
    pub const HIGHLIGHT_CRITICAL: Color = Color::Red;

    // Borders
    pub const BORDER: Color = Color::Gray;
    pub const BORDER_FOCUSED: Color = Color::Cyan;

    // Metrics colors
    pub const CPU_COLOR: Color = Color::LightRed;
    pub const MEM_COLOR: Color = Color::Green;
    pub const UPTIME_COLOR: Color = Color::Blue;
    pub const LOAD_COLOR: Color = Color::Yellow;
    pub const QUEUE_COLOR: Color = Color::Green;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel border, highlighted when the panel has focus.
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Theme::BORDER_FOCUSED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::BORDER)
        }
    }

    /// Metric label style (left column of the system panel).
    pub fn label() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Section header style for detail popups.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Value color for the n-th row of the system panel.
    pub fn system_value(row: usize) -> Style {
        let color = match row {
            0 => Theme::CPU_COLOR,
            1 => Theme::MEM_COLOR,
            2 => Theme::UPTIME_COLOR,
            _ => Theme::LOAD_COLOR,
        };
        Style::default().fg(color)
    }

    /// Queue counter style.
    pub fn queue() -> Style {
        Style::default().fg(Theme::QUEUE_COLOR)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Active => Style::default().fg(Theme::HIGHLIGHT_OK),
            RowStyleClass::Critical => Style::default().fg(Theme::HIGHLIGHT_CRITICAL),
            RowStyleClass::Dimmed => Self::dim(),
        }
    }
}
