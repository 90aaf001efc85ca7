//! UI-agnostic view model types.
//!
//! These types carry presentation data without depending on ratatui. The TUI
//! maps them to styles; the one-shot text dump prints them as-is.

/// Style classification for rows and cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Positive/healthy (TUI: green).
    Active,
    /// Failing or disabled (TUI: red).
    Critical,
    /// Placeholder or inactive (TUI: dark gray).
    Dimmed,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

impl ViewRow {
    /// Cell texts in column order.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow>,
}

/// A labelled value, as shown in the system panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}
