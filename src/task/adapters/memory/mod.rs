//! In-memory adapter implementations.
//!
//! These adapters keep state behind an `Arc<RwLock<_>>` so clones share the
//! same storage, which lets tests inspect what the service wrote.

mod persistence;

pub use persistence::InMemoryTaskPersistence;
