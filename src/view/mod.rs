//! UI-agnostic view models.
//!
//! Each sub-module turns snapshot data into plain strings and style classes.
//! The TUI maps them to ratatui widgets; one-shot mode prints them.

pub mod common;
pub mod dashboard;
pub mod inputs;

pub use dashboard::DashboardView;
pub use inputs::{InputDetail, input_list_items};
