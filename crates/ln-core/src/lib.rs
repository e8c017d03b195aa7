//! `ln-core` — foundational types for the `rust_ln` logistics network
//! simulator.
//!
//! This crate is a dependency of every other `ln-*` crate.  It intentionally
//! has no `ln-*` dependencies and minimal external ones (`rand`, `serde`,
//! `chrono`, `thiserror`).
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`routes`]     | `RouteId`, `RouteAssignment`, the route universe      |
//! | [`inventory`]  | `StoreLevel`, the inventory document                  |
//! | [`disruption`] | `Disruption`, `DisruptionKind`, `Severity`            |
//! | [`log`]        | `LogEntry` — the audit log record                     |
//! | [`time`]       | `Tick`, the `utc_z` timestamp wire format             |
//! | [`rng`]        | `SimRng` — the seedable simulation RNG                |

pub mod disruption;
pub mod inventory;
pub mod log;
pub mod rng;
pub mod routes;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use disruption::{Disruption, DisruptionKind, DisruptionsDoc, Severity};
pub use inventory::{InventoryDoc, StoreLevel};
pub use log::{LogDoc, LogEntry};
pub use rng::SimRng;
pub use routes::{ParseRouteError, RouteAssignment, RouteId, RoutesDoc};
pub use time::Tick;
