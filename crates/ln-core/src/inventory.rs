//! Store stock levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stock state for one store.
///
/// Unsigned fields make "stock ≥ 0" a type invariant rather than a runtime
/// check.  A document missing either field fails deserialization outright —
/// malformed inventory is a data-integrity error, never silently defaulted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLevel {
    pub stock: u32,
    pub threshold: u32,
}

/// The inventory document: store name → stock level.
///
/// `BTreeMap` keys are sorted, which fixes the iteration order of the restock
/// pass — log output and tests are reproducible without extra bookkeeping.
pub type InventoryDoc = BTreeMap<String, StoreLevel>;
