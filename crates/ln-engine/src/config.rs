//! Engine configuration.

use std::time::Duration;

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Wall-clock delay between periodic ticks.
    pub tick_interval: Duration,

    /// Resolve the oldest active disruption every N ticks.
    ///
    /// This is a tick-count policy, not a wall-clock one: the narrated
    /// "active for approximately X seconds" in the resolution log entry is
    /// derived as `tick_interval × resolve_cadence_ticks`.
    pub resolve_cadence_ticks: u64,

    /// Number of routes in the fixed universe `Route 1 ..= Route N`.
    pub route_count: u16,

    /// Master RNG seed.  The same seed over the same starting documents
    /// replays an identical run.
    pub seed: u64,

    /// Probability that an external trigger lowers a store's stock instead
    /// of adding a disruption.  Tunable, not a contract.
    pub shock_probability: f64,

    /// Step count used by fast-forward requests that don't name one.
    pub fast_forward_default: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(2),
            resolve_cadence_ticks: 2,
            route_count: 9,
            seed: 42,
            shock_probability: 0.5,
            fast_forward_default: 5,
        }
    }
}

impl EngineConfig {
    /// Seconds one resolution window spans, for the resolution narration.
    pub fn resolution_window_secs(&self) -> f64 {
        self.tick_interval.as_secs_f64() * self.resolve_cadence_ticks as f64
    }
}
