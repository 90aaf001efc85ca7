//! beattop - terminal dashboard for a log-shipping agent.
//!
//! The library is split the way data flows:
//! - `collector` - fetches the agent's `/stats` and `/inputs` and publishes
//!   snapshots
//! - `storage` - the snapshot model and the single-writer store
//! - `view` - UI-agnostic view models and formatting
//! - `tui` - interactive terminal frontend

pub mod collector;
pub mod fmt;
pub mod storage;
pub mod tui;
pub mod view;
