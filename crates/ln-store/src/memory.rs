//! In-memory store backend.
//!
//! Backs tests and throwaway runs.  Documents live behind one mutex; loads
//! clone the current document so callers get a consistent snapshot that is
//! unaffected by later mutation.

use std::collections::HashMap;
use std::sync::Mutex;

use ln_core::{DisruptionsDoc, InventoryDoc, LogDoc, LogEntry, RoutesDoc};

use crate::error::StoreResult;
use crate::store::{Domain, StateStore};

#[derive(Default)]
struct Docs {
    inventory: InventoryDoc,
    routes: RoutesDoc,
    disruptions: DisruptionsDoc,
    logs: LogDoc,
}

/// Mutexed in-process [`StateStore`].
///
/// Also counts saves per domain, which lets tests assert the
/// "persist once, and only when something changed" contract.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<Docs>,
    save_counts: Mutex<HashMap<Domain, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given domain documents.
    pub fn seeded(
        inventory: InventoryDoc,
        routes: RoutesDoc,
        disruptions: DisruptionsDoc,
    ) -> Self {
        let store = Self::new();
        {
            let mut docs = store.docs.lock().unwrap();
            docs.inventory = inventory;
            docs.routes = routes;
            docs.disruptions = disruptions;
        }
        store
    }

    /// Number of `save_*` calls issued against `domain` so far.
    pub fn save_count(&self, domain: Domain) -> usize {
        *self.save_counts.lock().unwrap().get(&domain).unwrap_or(&0)
    }

    fn bump(&self, domain: Domain) {
        *self.save_counts.lock().unwrap().entry(domain).or_insert(0) += 1;
    }
}

impl StateStore for MemoryStore {
    fn load_inventory(&self) -> StoreResult<InventoryDoc> {
        Ok(self.docs.lock().unwrap().inventory.clone())
    }

    fn save_inventory(&self, doc: &InventoryDoc) -> StoreResult<()> {
        self.docs.lock().unwrap().inventory = doc.clone();
        self.bump(Domain::Inventory);
        Ok(())
    }

    fn load_routes(&self) -> StoreResult<RoutesDoc> {
        Ok(self.docs.lock().unwrap().routes.clone())
    }

    fn save_routes(&self, doc: &RoutesDoc) -> StoreResult<()> {
        self.docs.lock().unwrap().routes = doc.clone();
        self.bump(Domain::Routes);
        Ok(())
    }

    fn load_disruptions(&self) -> StoreResult<DisruptionsDoc> {
        Ok(self.docs.lock().unwrap().disruptions.clone())
    }

    fn save_disruptions(&self, doc: &DisruptionsDoc) -> StoreResult<()> {
        self.docs.lock().unwrap().disruptions = doc.clone();
        self.bump(Domain::Disruptions);
        Ok(())
    }

    fn load_logs(&self) -> StoreResult<LogDoc> {
        Ok(self.docs.lock().unwrap().logs.clone())
    }

    fn save_logs(&self, doc: &LogDoc) -> StoreResult<()> {
        self.docs.lock().unwrap().logs = doc.clone();
        self.bump(Domain::Logs);
        Ok(())
    }

    // Single lock acquisition instead of the default load-then-save pair.
    fn append_log(&self, entry: &LogEntry) -> StoreResult<()> {
        self.docs.lock().unwrap().logs.push(entry.clone());
        self.bump(Domain::Logs);
        Ok(())
    }
}
