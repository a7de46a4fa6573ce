#![warn(clippy::uninlined_format_args)]

pub mod snapshot;
pub mod store;

pub use snapshot::{Snapshot, SnapshotError};
pub use store::SnapshotStore;
