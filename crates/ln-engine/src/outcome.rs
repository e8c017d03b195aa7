//! Status and outcome types returned to external callers.
//!
//! These serialize into the shapes a request surface passes through
//! verbatim, with a lowercase `status` tag distinguishing expected no-op
//! outcomes (`no_available_route`, `store_already_empty`, `no_stores`) from
//! successful mutations (`ok`).

use serde::Serialize;

use ln_core::Disruption;

// ── EngineStatus ──────────────────────────────────────────────────────────────

/// Snapshot of the engine's control state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineStatus {
    /// Completed simulation steps so far.
    pub tick: u64,
    /// Whether the periodic driver is currently skipping ticks.
    pub paused: bool,
    /// Terminal: a stopped engine never runs again.
    pub stopped: bool,
}

// ── TriggerOutcome ────────────────────────────────────────────────────────────

/// Result of an externally triggered disruption or inventory shock.
///
/// Every variant is a *valid* outcome — the no-op cases are distinguishable
/// from store failures, which surface as
/// [`EngineError`](crate::EngineError) instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TriggerOutcome {
    /// A disruption was created and appended to the FIFO.
    #[serde(rename = "ok")]
    DisruptionAdded { disruption: Disruption },

    /// A store's stock was lowered.
    #[serde(rename = "ok")]
    StockLowered { store: String, new_stock: u32 },

    /// Every candidate route already holds a disruption.
    NoAvailableRoute,

    /// The chosen store was already at zero stock.
    StoreAlreadyEmpty { store: String },

    /// The inventory document holds no stores at all.
    NoStores,
}
