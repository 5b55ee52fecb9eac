pub mod client;
pub mod snapshot;

pub use client::{HttpStoreClient, RecordSource};
pub use snapshot::RecordSnapshot;
