//! Durable persistence for widget collections.

mod kv;
mod snapshot;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use snapshot::{load_or_default, persist};
