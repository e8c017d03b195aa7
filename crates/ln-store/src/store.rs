//! The `StateStore` trait and the persisted-domain enumeration.

use std::fmt;

use ln_core::{DisruptionsDoc, InventoryDoc, LogDoc, LogEntry, RoutesDoc};

use crate::error::StoreResult;

// ── Domain ────────────────────────────────────────────────────────────────────

/// The four persisted domains.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Inventory,
    Routes,
    Disruptions,
    Logs,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Inventory,
        Domain::Routes,
        Domain::Disruptions,
        Domain::Logs,
    ];

    /// File name used by file-backed stores.
    pub fn file_name(self) -> &'static str {
        match self {
            Domain::Inventory => "inventory.json",
            Domain::Routes => "routes.json",
            Domain::Disruptions => "disruptions.json",
            Domain::Logs => "logs.json",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Domain::Inventory => "inventory",
            Domain::Routes => "routes",
            Domain::Disruptions => "disruptions",
            Domain::Logs => "logs",
        };
        f.write_str(s)
    }
}

// ── StateStore ────────────────────────────────────────────────────────────────

/// Typed load/save access to the four persisted documents.
///
/// Every `save_*` must be atomic relative to a concurrent `load_*`: a reader
/// never sees a partially written document.  Mutual exclusion between
/// *writers* is the caller's job — all mutation paths run inside the engine's
/// serialized tick region.
pub trait StateStore: Send + Sync + 'static {
    fn load_inventory(&self) -> StoreResult<InventoryDoc>;
    fn save_inventory(&self, doc: &InventoryDoc) -> StoreResult<()>;

    fn load_routes(&self) -> StoreResult<RoutesDoc>;
    fn save_routes(&self, doc: &RoutesDoc) -> StoreResult<()>;

    fn load_disruptions(&self) -> StoreResult<DisruptionsDoc>;
    fn save_disruptions(&self, doc: &DisruptionsDoc) -> StoreResult<()>;

    fn load_logs(&self) -> StoreResult<LogDoc>;
    fn save_logs(&self, doc: &LogDoc) -> StoreResult<()>;

    /// Append one audit record: read-all, append-one, write-all.
    ///
    /// Called only from inside the serialized tick region, so the
    /// load-then-save pair cannot interleave with another writer.
    fn append_log(&self, entry: &LogEntry) -> StoreResult<()> {
        let mut logs = self.load_logs()?;
        logs.push(entry.clone());
        self.save_logs(&logs)
    }
}
