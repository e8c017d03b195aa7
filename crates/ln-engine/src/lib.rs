//! `ln-engine` — the simulation orchestration engine.
//!
//! [`SimEngine`] advances the logistics network one tick at a time: restock
//! pass, disruption inspection, reroute pass, cadenced oldest-disruption
//! resolution — with an audit log entry for every mutating action.
//!
//! [`EngineDriver`] wraps an engine in a dedicated worker thread that selects
//! over a periodic ticker and a command channel.  The worker owns the engine
//! outright, so at most one step (or external mutation) executes at any
//! instant; pause, resume, fast-forward, and disruption injection arrive as
//! commands and are serialized against the timer for free.
//!
//! ```rust,ignore
//! let store = Arc::new(JsonDirStore::open("./data")?);
//! let engine = SimEngine::new(EngineConfig::default(), Arc::clone(&store))?;
//! let driver = EngineDriver::spawn(engine);
//!
//! driver.fast_forward(Some(5))?;           // returns before the steps run
//! let status = driver.toggle_pause()?;     // takes effect at a tick boundary
//! driver.stop()?;                          // waits for the in-flight step
//! ```

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod outcome;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use driver::{DriverError, DriverResult, EngineDriver};
pub use engine::{SimEngine, StepReport};
pub use error::{EngineError, EngineResult};
pub use outcome::{EngineStatus, TriggerOutcome};
