//! Truck rerouting around disrupted routes.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use ln_core::{Disruption, RouteId, RoutesDoc};
use ln_store::{StateStore, StoreResult};

/// One truck moved off a disrupted route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RerouteAction {
    pub truck: String,
    pub from_route: RouteId,
    pub to_route: RouteId,
    pub reason: String,
}

/// Owns truck→route assignments and the reroute policy.
///
/// Consumes the disruption sequence as input; it never mutates it.
pub struct RouteAgent<S> {
    store: Arc<S>,
    /// The fixed route universe, ascending by route number.
    universe: Vec<RouteId>,
}

impl<S: StateStore> RouteAgent<S> {
    pub fn new(store: Arc<S>, universe: Vec<RouteId>) -> Self {
        Self { store, universe }
    }

    /// Read-only snapshot of the assignments document.
    pub fn assignments(&self) -> StoreResult<RoutesDoc> {
        self.store.load_routes()
    }

    /// Move each truck whose route is disrupted onto the lowest-numbered
    /// route that is neither disrupted nor already in use.
    ///
    /// Trucks are visited in assignment order, and each successful move adds
    /// the new route to the in-use set, so one pass never creates a new
    /// collision.  A truck with no free candidate stays on its disrupted
    /// route — starvation is an expected outcome, not an error.  Persists
    /// once, and only if at least one reassignment happened.
    pub fn reroute_if_needed(&self, active: &[Disruption]) -> StoreResult<Vec<RerouteAction>> {
        let mut doc = self.store.load_routes()?;

        let disrupted: BTreeSet<RouteId> = active.iter().map(|d| d.location).collect();
        let mut used: BTreeSet<RouteId> = doc.iter().map(|a| a.route).collect();
        let mut actions = Vec::new();

        for assignment in doc.iter_mut() {
            if !disrupted.contains(&assignment.route) {
                continue;
            }

            // Universe is ascending, so the first free route is the lowest-numbered.
            let candidate = self
                .universe
                .iter()
                .copied()
                .find(|r| !disrupted.contains(r) && !used.contains(r));
            let Some(to_route) = candidate else {
                continue;
            };

            let from_route = assignment.route;
            assignment.route = to_route;
            used.insert(to_route);
            actions.push(RerouteAction {
                truck: assignment.truck.clone(),
                from_route,
                to_route,
                reason: format!("Disruption on {from_route}"),
            });
        }

        if !actions.is_empty() {
            self.store.save_routes(&doc)?;
        }
        Ok(actions)
    }
}
