//! `ln-agents` — the three per-domain decision agents.
//!
//! Each agent exclusively owns one persisted domain and exposes the decision
//! passes the engine composes into a tick:
//!
//! | Agent              | Owns        | Decision                                  |
//! |--------------------|-------------|-------------------------------------------|
//! | [`InventoryAgent`] | inventory   | restock below-threshold stores            |
//! | [`DisruptionAgent`]| disruptions | create / enumerate / resolve disruptions  |
//! | [`RouteAgent`]     | routes      | move trucks off disrupted routes          |
//!
//! Agents hold no domain state in memory: every call is a read-modify-write
//! against the shared [`StateStore`](ln_store::StateStore), persisted at most
//! once per call and only when something actually changed.  The `RouteAgent`
//! reads the disruption sequence (as an argument) but never mutates it.

pub mod disruption;
pub mod inventory;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use disruption::DisruptionAgent;
pub use inventory::{InventoryAgent, RestockAction, ShockOutcome};
pub use route::{RerouteAction, RouteAgent};
