//! Inventory restocking.

use std::sync::Arc;

use serde::Serialize;

use ln_core::InventoryDoc;
use ln_store::{StateStore, StoreResult};

// ── Action records ────────────────────────────────────────────────────────────

/// One store raised back to its threshold during a restock pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestockAction {
    pub store: String,
    pub restock_amount: u32,
    pub new_stock: u32,
    pub threshold: u32,
}

/// Result of an externally triggered stock-lowering.
///
/// All three variants are valid outcomes, not errors — the caller
/// distinguishes them from store failures by type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShockOutcome {
    Lowered { new_stock: u32 },
    AlreadyEmpty,
    UnknownStore,
}

// ── InventoryAgent ────────────────────────────────────────────────────────────

/// Owns per-store stock levels and the restock policy.
pub struct InventoryAgent<S> {
    store: Arc<S>,
}

impl<S: StateStore> InventoryAgent<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Read-only snapshot of the inventory document.
    pub fn inventory(&self) -> StoreResult<InventoryDoc> {
        self.store.load_inventory()
    }

    /// Raise every below-threshold store back to its threshold.
    ///
    /// Iterates stores in sorted-name order (the document's key order), so
    /// the returned actions — and the log entries derived from them — are
    /// reproducible.  Persists the document once, and only if at least one
    /// restock happened.
    pub fn restock_if_needed(&self) -> StoreResult<Vec<RestockAction>> {
        let mut doc = self.store.load_inventory()?;
        let mut actions = Vec::new();

        for (name, level) in doc.iter_mut() {
            if level.stock < level.threshold {
                let restock_amount = level.threshold - level.stock;
                level.stock = level.threshold;
                actions.push(RestockAction {
                    store: name.clone(),
                    restock_amount,
                    new_stock: level.stock,
                    threshold: level.threshold,
                });
            }
        }

        if !actions.is_empty() {
            self.store.save_inventory(&doc)?;
        }
        Ok(actions)
    }

    /// Lower one store's stock by `amount`, saturating at zero.
    ///
    /// This is the external disruption path that acts on inventory directly:
    /// it bypasses the restock pass and creates no disruption record.  A
    /// store already at zero is left untouched and reported as
    /// [`ShockOutcome::AlreadyEmpty`].
    pub fn lower_stock(&self, store_name: &str, amount: u32) -> StoreResult<ShockOutcome> {
        let mut doc = self.store.load_inventory()?;
        let Some(level) = doc.get_mut(store_name) else {
            return Ok(ShockOutcome::UnknownStore);
        };
        if level.stock == 0 {
            return Ok(ShockOutcome::AlreadyEmpty);
        }

        level.stock = level.stock.saturating_sub(amount);
        let new_stock = level.stock;
        self.store.save_inventory(&doc)?;
        Ok(ShockOutcome::Lowered { new_stock })
    }
}
