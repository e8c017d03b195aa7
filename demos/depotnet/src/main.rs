//! depotnet — smallest end-to-end run of the rust_ln simulator.
//!
//! Seeds a three-store, four-truck network into `./data`, runs the periodic
//! driver for a few seconds, injects a disruption, fast-forwards, pauses and
//! resumes, then prints the audit log tail.  Re-running against an existing
//! `./data` directory resumes from its persisted state.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use ln_core::{RouteAssignment, RouteId, StoreLevel};
use ln_engine::{EngineConfig, EngineDriver, SimEngine};
use ln_store::{JsonDirStore, StateStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const DATA_DIR: &str = "./data";
const TICK_INTERVAL: Duration = Duration::from_millis(500);
const RUN_FOR: Duration = Duration::from_secs(3);
const LOG_TAIL: usize = 8;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let store = Arc::new(JsonDirStore::open(DATA_DIR)?);
    seed_if_empty(&store)?;

    let config = EngineConfig {
        tick_interval: TICK_INTERVAL,
        ..EngineConfig::default()
    };
    let engine = SimEngine::new(config, Arc::clone(&store))?;
    let mut driver = EngineDriver::spawn(engine);

    println!("periodic driver running at {} ms/tick", TICK_INTERVAL.as_millis());
    std::thread::sleep(RUN_FOR);

    // External trigger, same serialized path as the timer.
    let outcome = driver.inject_disruption()??;
    println!("injected: {}", serde_json::to_string(&outcome)?);

    // Burst of 5 ticks; returns immediately, the status query behind it
    // observes the completed burst.
    driver.fast_forward(Some(5))?;
    println!("after fast-forward: tick {}", driver.status()?.tick);

    let paused = driver.toggle_pause()?;
    println!("paused at tick {} (paused: {})", paused.tick, paused.paused);
    std::thread::sleep(Duration::from_millis(1200));
    let resumed = driver.toggle_pause()?;
    println!("resumed at tick {} (unchanged while paused)", resumed.tick);

    std::thread::sleep(RUN_FOR);
    let final_status = driver.stop()?;
    println!("stopped at tick {}", final_status.tick);

    // ── Audit log tail ────────────────────────────────────────────────────
    let logs = store.load_logs()?;
    println!("\nlast {} of {} audit entries:", LOG_TAIL.min(logs.len()), logs.len());
    for entry in logs.iter().rev().take(LOG_TAIL).rev() {
        println!("  {:<16} {:<20} {}", entry.agent, entry.action, entry.explanation);
    }

    Ok(())
}

/// First-run seed: three stores (one below threshold) and four trucks.
fn seed_if_empty(store: &JsonDirStore) -> Result<()> {
    if !store.load_inventory()?.is_empty() {
        return Ok(());
    }

    let inventory: BTreeMap<String, StoreLevel> = [
        ("Store A", StoreLevel { stock: 10, threshold: 5 }),
        ("Store B", StoreLevel { stock: 2, threshold: 6 }),
        ("Store C", StoreLevel { stock: 7, threshold: 4 }),
    ]
    .into_iter()
    .map(|(name, level)| (name.to_string(), level))
    .collect();
    store.save_inventory(&inventory)?;

    let routes = ["Truck A", "Truck B", "Truck C", "Truck D"]
        .into_iter()
        .zip([1u16, 3, 5, 7])
        .map(|(truck, route)| RouteAssignment {
            truck: truck.to_string(),
            route: RouteId(route),
        })
        .collect();
    store.save_routes(&routes)?;

    println!("seeded fresh network into {DATA_DIR}");
    Ok(())
}
