//! In-memory state: the data model, the bounded history and the shared
//! last-known snapshot cell.

mod history;
pub mod model;
mod store;

pub use history::{HISTORY_CAPACITY, History};
pub use model::Snapshot;
pub use store::{StoreReader, StoreWriter};
