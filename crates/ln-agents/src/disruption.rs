//! Disruption lifecycle: creation, enumeration, FIFO resolution.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;

use ln_core::{Disruption, DisruptionKind, RouteId, Severity, SimRng};
use ln_store::{StateStore, StoreResult};

/// Owns the ordered collection of active disruptions.
pub struct DisruptionAgent<S> {
    store: Arc<S>,
}

impl<S: StateStore> DisruptionAgent<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All active disruptions in creation order.  Read-only.
    pub fn list_active(&self) -> StoreResult<Vec<Disruption>> {
        Ok(self.store.load_disruptions()?.into_iter().collect())
    }

    /// Create a disruption on one of `candidates`, avoiding routes that are
    /// already disrupted.
    ///
    /// Returns `Ok(None)` when every candidate already holds a disruption —
    /// a valid "nothing to disrupt" outcome, not an error.  The location is
    /// chosen uniformly at random over the *sorted* available set, and kind
    /// and severity uniformly over their enums, so a pinned `SimRng` seed
    /// selects reproducibly.
    pub fn add_disruption(
        &self,
        candidates: &[RouteId],
        rng: &mut SimRng,
    ) -> StoreResult<Option<Disruption>> {
        let mut doc = self.store.load_disruptions()?;

        let blocked: BTreeSet<RouteId> = doc.iter().map(|d| d.location).collect();
        let available: BTreeSet<RouteId> = candidates
            .iter()
            .copied()
            .filter(|r| !blocked.contains(r))
            .collect();
        let available: Vec<RouteId> = available.into_iter().collect();

        let Some(&location) = rng.choose(&available) else {
            return Ok(None);
        };
        let kind = DisruptionKind::ALL[rng.gen_range(0..DisruptionKind::ALL.len())];
        let severity = Severity::ALL[rng.gen_range(0..Severity::ALL.len())];

        let disruption = Disruption {
            kind,
            location,
            severity,
            timestamp: Utc::now(),
        };
        doc.push_back(disruption.clone());
        self.store.save_disruptions(&doc)?;
        Ok(Some(disruption))
    }

    /// Remove and return the oldest active disruption.
    ///
    /// Strict FIFO: the head of the sequence resolves first no matter its
    /// kind or severity.  Returns `Ok(None)` when nothing is active.
    pub fn resolve_oldest(&self) -> StoreResult<Option<Disruption>> {
        let mut doc = self.store.load_disruptions()?;
        let Some(resolved) = doc.pop_front() else {
            return Ok(None);
        };
        self.store.save_disruptions(&doc)?;
        Ok(Some(resolved))
    }
}
