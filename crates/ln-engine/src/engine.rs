//! The `SimEngine` struct and its tick sequence.

use std::sync::Arc;

use ln_agents::{DisruptionAgent, InventoryAgent, RestockAction, RerouteAction, RouteAgent, ShockOutcome};
use ln_core::{Disruption, LogEntry, RouteId, SimRng, Tick};
use ln_store::StateStore;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::outcome::{EngineStatus, TriggerOutcome};

// ── StepReport ────────────────────────────────────────────────────────────────

/// Everything one tick did, in sub-step order.
///
/// All mutating actions in the report have already been appended to the
/// audit log by the time `step()` returns.
#[derive(Clone, Debug)]
pub struct StepReport {
    /// The tick this report describes (post-increment).
    pub tick: Tick,
    /// Stores raised back to threshold this tick.
    pub restocks: Vec<RestockAction>,
    /// The disruption set the reroute pass ran against.
    pub disruptions_seen: Vec<Disruption>,
    /// Trucks moved off disrupted routes this tick.
    pub reroutes: Vec<RerouteAction>,
    /// The FIFO head resolved this tick, if the cadence fired and one existed.
    pub resolved: Option<Disruption>,
}

// ── Engine state ──────────────────────────────────────────────────────────────

/// Control state: `Running` ⇄ `Paused`, either → `Stopped` (terminal).
#[derive(Clone, Debug, Default)]
struct EngineState {
    tick: Tick,
    paused: bool,
    stopped: bool,
}

// ── SimEngine ─────────────────────────────────────────────────────────────────

/// The simulation orchestrator.
///
/// Owns the engine control state and composes the three domain agents in a
/// fixed order per tick.  Domain state itself lives in the [`StateStore`];
/// each agent call is a read-modify-write, so the engine is the only place
/// that needs serializing — which [`EngineDriver`](crate::EngineDriver) does
/// by giving the engine to a single worker thread.
///
/// `step()` deliberately ignores the pause flag: fast-forward uses it
/// directly, and only the periodic driver consults `paused`.
pub struct SimEngine<S: StateStore> {
    config: EngineConfig,
    state: EngineState,
    universe: Vec<RouteId>,
    inventory: InventoryAgent<S>,
    disruptions: DisruptionAgent<S>,
    routes: RouteAgent<S>,
    store: Arc<S>,
    rng: SimRng,
}

impl<S: StateStore> SimEngine<S> {
    /// Build an engine over `store` with validated configuration.
    pub fn new(config: EngineConfig, store: Arc<S>) -> EngineResult<Self> {
        if config.resolve_cadence_ticks == 0 {
            return Err(EngineError::Config(
                "resolve_cadence_ticks must be at least 1".to_string(),
            ));
        }
        if config.route_count == 0 {
            return Err(EngineError::Config("route_count must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&config.shock_probability) {
            return Err(EngineError::Config(format!(
                "shock_probability {} outside [0, 1]",
                config.shock_probability
            )));
        }

        let universe = RouteId::universe(config.route_count);
        Ok(Self {
            state: EngineState::default(),
            universe: universe.clone(),
            inventory: InventoryAgent::new(Arc::clone(&store)),
            disruptions: DisruptionAgent::new(Arc::clone(&store)),
            routes: RouteAgent::new(Arc::clone(&store), universe),
            rng: SimRng::new(config.seed),
            store,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            tick: self.state.tick.0,
            paused: self.state.paused,
            stopped: self.state.stopped,
        }
    }

    // ── Control-state transitions ─────────────────────────────────────────

    /// Set the pause flag.  Idempotent; takes effect at the next tick
    /// boundary (an in-flight step always completes).
    pub fn pause(&mut self) -> EngineStatus {
        self.state.paused = true;
        self.status()
    }

    /// Clear the pause flag.  Idempotent.
    pub fn resume(&mut self) -> EngineStatus {
        self.state.paused = false;
        self.status()
    }

    /// Flip the pause flag and return the resulting status — the
    /// request-surface "pause" operation.
    pub fn toggle_pause(&mut self) -> EngineStatus {
        if self.state.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Enter the terminal `Stopped` state.
    pub fn stop(&mut self) -> EngineStatus {
        self.state.stopped = true;
        self.status()
    }

    // ── Core tick sequence ────────────────────────────────────────────────

    /// Execute exactly one tick.
    ///
    /// The sub-step order is load-bearing: the reroute pass runs against the
    /// disruption set *before* any same-tick resolution, so every disruption
    /// is visible to the routing layer for at least one full tick before it
    /// can be cleared.
    pub fn step(&mut self) -> EngineResult<StepReport> {
        self.state.tick = self.state.tick.next();
        let tick = self.state.tick;

        // ── 1: restock pass ───────────────────────────────────────────────
        let restocks = self.inventory.restock_if_needed()?;
        for action in &restocks {
            self.log(
                "InventoryAgent",
                "restock",
                &action.store,
                format!(
                    "Restocked {} units at {} (new stock: {}, threshold: {})",
                    action.restock_amount, action.store, action.new_stock, action.threshold
                ),
            );
        }

        // ── 2: disruption inspection (pure observability) ─────────────────
        let disruptions_seen = self.disruptions.list_active()?;
        for disruption in &disruptions_seen {
            self.log(
                "DisruptionAgent",
                "disruption_check",
                disruption.location.to_string(),
                format!(
                    "Checked disruption of type {} at {}",
                    disruption.kind, disruption.location
                ),
            );
        }

        // ── 3: reroute pass over the same disruption set ──────────────────
        let reroutes = self.routes.reroute_if_needed(&disruptions_seen)?;
        for action in &reroutes {
            self.log(
                "RouteAgent",
                "reroute",
                &action.truck,
                format!(
                    "Rerouted {} from {} to {} due to {}",
                    action.truck, action.from_route, action.to_route, action.reason
                ),
            );
        }

        // ── 4: cadenced FIFO resolution ───────────────────────────────────
        let resolved = if tick.on_cadence(self.config.resolve_cadence_ticks) {
            let resolved = self.disruptions.resolve_oldest()?;
            if let Some(disruption) = &resolved {
                self.log(
                    "DisruptionAgent",
                    "resolve_disruption",
                    disruption.location.to_string(),
                    format!(
                        "Resolved disruption: {} at {} (severity: {}). \
                         This disruption was active for approximately {} seconds \
                         ({} simulation ticks).",
                        disruption.kind.title_case(),
                        disruption.location,
                        disruption.severity,
                        self.config.resolution_window_secs(),
                        self.config.resolve_cadence_ticks
                    ),
                );
            }
            resolved
        } else {
            None
        };

        Ok(StepReport {
            tick,
            restocks,
            disruptions_seen,
            reroutes,
            resolved,
        })
    }

    /// Execute `n` ticks back-to-back, ignoring the pause flag.
    ///
    /// Asynchronous dispatch (not blocking the requester) is the driver's
    /// job; this method is the synchronous burst it runs.
    pub fn fast_forward(&mut self, n: u32) -> EngineResult<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(n as usize);
        for _ in 0..n {
            reports.push(self.step()?);
        }
        Ok(reports)
    }

    // ── External trigger paths ────────────────────────────────────────────

    /// Create a disruption on a random free route from the full universe.
    pub fn inject_disruption(&mut self) -> EngineResult<TriggerOutcome> {
        match self.disruptions.add_disruption(&self.universe, &mut self.rng)? {
            None => Ok(TriggerOutcome::NoAvailableRoute),
            Some(disruption) => {
                self.log(
                    "DisruptionAgent",
                    "external_disruption",
                    disruption.location.to_string(),
                    format!(
                        "Injected {} disruption at {} (severity: {})",
                        disruption.kind, disruption.location, disruption.severity
                    ),
                );
                Ok(TriggerOutcome::DisruptionAdded { disruption })
            }
        }
    }

    /// Lower a random store's stock by a random 1–5 units.
    ///
    /// This path deliberately bypasses the disruption FIFO: no `Disruption`
    /// record is created and nothing is ever "resolved" for it.
    pub fn inject_inventory_shock(&mut self) -> EngineResult<TriggerOutcome> {
        let inventory = self.inventory.inventory()?;
        let names: Vec<&String> = inventory.keys().collect();
        if names.is_empty() {
            return Ok(TriggerOutcome::NoStores);
        }

        let name = names[self.rng.gen_range(0..names.len())].clone();
        let amount: u32 = self.rng.gen_range(1..=5);

        match self.inventory.lower_stock(&name, amount)? {
            ShockOutcome::Lowered { new_stock } => {
                self.log(
                    "InventoryAgent",
                    "external_shock",
                    &name,
                    format!("Lowered stock at {name} by {amount} units (new stock: {new_stock})"),
                );
                Ok(TriggerOutcome::StockLowered { store: name, new_stock })
            }
            ShockOutcome::AlreadyEmpty => Ok(TriggerOutcome::StoreAlreadyEmpty { store: name }),
            // Only reachable if an external process edits the inventory file
            // between our read and write; report it as the nearest no-op.
            ShockOutcome::UnknownStore => Ok(TriggerOutcome::NoStores),
        }
    }

    /// The request-surface coin flip between the two trigger paths.
    pub fn trigger_random(&mut self) -> EngineResult<TriggerOutcome> {
        if self.rng.gen_bool(self.config.shock_probability) {
            self.inject_inventory_shock()
        } else {
            self.inject_disruption()
        }
    }

    // ── Audit log ─────────────────────────────────────────────────────────

    /// Append one audit record.
    ///
    /// An append failure is reported and swallowed: the tick's in-memory
    /// result stands, the entry stays unpersisted, and the scheduling loop
    /// keeps running.
    fn log(
        &self,
        agent: &str,
        action: &str,
        target: impl AsRef<str>,
        explanation: String,
    ) {
        let entry = LogEntry::new(agent, action, target.as_ref(), explanation);
        if let Err(err) = self.store.append_log(&entry) {
            tracing::error!(%err, agent, action, "audit log append failed; entry dropped");
        }
    }
}
