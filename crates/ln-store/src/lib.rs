//! `ln-store` — durable state for the rust_ln logistics network simulator.
//!
//! The simulation keeps no domain state in memory: every agent call is a
//! read-modify-write against one of four persisted documents (inventory,
//! routes, disruptions, logs).  This crate provides the [`StateStore`]
//! abstraction over those documents and two backends:
//!
//! | Backend        | Medium                       | Used by              |
//! |----------------|------------------------------|----------------------|
//! | [`JsonDirStore`] | one JSON file per domain   | production / demo    |
//! | [`MemoryStore`]  | mutexed in-process documents | tests, throwaway runs |
//!
//! Writers must be serialized externally (the engine's single-worker driver
//! does this); readers may run concurrently and always observe a complete
//! document — `JsonDirStore` saves via write-temp-then-rename, and
//! `MemoryStore` clones under a lock.

pub mod error;
pub mod json;
pub mod memory;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StoreError, StoreResult};
pub use json::JsonDirStore;
pub use memory::MemoryStore;
pub use store::{Domain, StateStore};
