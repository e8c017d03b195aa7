//! JSON-file store backend.
//!
//! One pretty-printed JSON file per domain in a single directory, matching
//! the layout the rest of the tooling around this simulator expects:
//!
//! ```text
//! data/
//!   inventory.json     {"Store A": {"stock": 10, "threshold": 5}, ...}
//!   routes.json        [{"truck": "Truck A", "route": "Route 1"}, ...]
//!   disruptions.json   [{"type": "weather", "location": "Route 2", ...}, ...]
//!   logs.json          [{"timestamp": "...Z", "agent": "...", ...}, ...]
//! ```
//!
//! Saves go through a temp file in the same directory followed by a rename,
//! so a concurrent reader sees either the old document or the new one, never
//! a torn write.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use ln_core::{DisruptionsDoc, InventoryDoc, LogDoc, RoutesDoc};

use crate::error::{StoreError, StoreResult};
use crate::store::{Domain, StateStore};

/// File-backed [`StateStore`] with one JSON document per domain.
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `dir`, creating the directory and any missing
    /// domain files (seeded with empty documents) on first use.
    ///
    /// Existing files are left untouched, so re-opening a data directory
    /// resumes from its persisted state.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(StoreError::Dir)?;

        let store = Self { dir };
        for domain in Domain::ALL {
            if !store.path(domain).exists() {
                match domain {
                    Domain::Inventory => store.save(domain, &InventoryDoc::new())?,
                    Domain::Routes => store.save(domain, &RoutesDoc::new())?,
                    Domain::Disruptions => store.save(domain, &DisruptionsDoc::new())?,
                    Domain::Logs => store.save(domain, &LogDoc::new())?,
                }
            }
        }
        Ok(store)
    }

    fn path(&self, domain: Domain) -> PathBuf {
        self.dir.join(domain.file_name())
    }

    fn load<T: DeserializeOwned>(&self, domain: Domain) -> StoreResult<T> {
        let bytes = fs::read(self.path(domain))
            .map_err(|source| StoreError::Io { domain, source })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed { domain, source })
    }

    fn save<T: Serialize>(&self, domain: Domain, doc: &T) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(doc)
            .map_err(|source| StoreError::Malformed { domain, source })?;

        // Write-temp-then-rename keeps the visible file complete at all times.
        let tmp = self.dir.join(format!(".{}.tmp", domain.file_name()));
        fs::write(&tmp, json).map_err(|source| StoreError::Io { domain, source })?;
        fs::rename(&tmp, self.path(domain)).map_err(|source| StoreError::Io { domain, source })
    }
}

impl StateStore for JsonDirStore {
    fn load_inventory(&self) -> StoreResult<InventoryDoc> {
        self.load(Domain::Inventory)
    }

    fn save_inventory(&self, doc: &InventoryDoc) -> StoreResult<()> {
        self.save(Domain::Inventory, doc)
    }

    fn load_routes(&self) -> StoreResult<RoutesDoc> {
        self.load(Domain::Routes)
    }

    fn save_routes(&self, doc: &RoutesDoc) -> StoreResult<()> {
        self.save(Domain::Routes, doc)
    }

    fn load_disruptions(&self) -> StoreResult<DisruptionsDoc> {
        self.load(Domain::Disruptions)
    }

    fn save_disruptions(&self, doc: &DisruptionsDoc) -> StoreResult<()> {
        self.save(Domain::Disruptions, doc)
    }

    fn load_logs(&self) -> StoreResult<LogDoc> {
        self.load(Domain::Logs)
    }

    fn save_logs(&self, doc: &LogDoc) -> StoreResult<()> {
        self.save(Domain::Logs, doc)
    }
}
