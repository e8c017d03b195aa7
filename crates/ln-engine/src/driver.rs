//! The periodic driver: one worker thread, one command queue.
//!
//! # Serialization model
//!
//! The worker thread takes ownership of the [`SimEngine`] and is the only
//! code that ever touches it.  It `select!`s over two channels:
//!
//! - a `tick(interval)` ticker — each firing runs one step, unless paused;
//! - the command channel — pause/resume, fast-forward bursts, external
//!   triggers, status queries, stop.
//!
//! Mutual exclusion therefore needs no locks: at most one step or external
//! mutation executes at any instant, and the audit-log entries of one step
//! can never interleave with another's.  Commands that arrive mid-step wait
//! in the queue until the step completes — pause and stop take effect at
//! tick boundaries only.
//!
//! `fast_forward` acknowledges as soon as the command is queued; the burst
//! itself runs on the worker, so the requester never blocks on it.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded};
use thiserror::Error;

use ln_store::StateStore;

use crate::engine::SimEngine;
use crate::error::EngineResult;
use crate::outcome::{EngineStatus, TriggerOutcome};

/// Commands queued mid-step wait at most this many deep before the caller
/// sees [`DriverError::QueueFull`].
const COMMAND_QUEUE_CAPACITY: usize = 64;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors from the driver's command plumbing.
///
/// Engine-level failures inside a command (store errors during a trigger)
/// come back through the command's own reply as an
/// [`EngineError`](crate::EngineError).
#[derive(Debug, Error)]
pub enum DriverError {
    /// The worker has exited — stopped, or halted after a step failure.
    #[error("engine worker disconnected")]
    Disconnected,

    /// The command queue is saturated; the simulation is falling behind.
    #[error("engine command queue full (capacity {COMMAND_QUEUE_CAPACITY})")]
    QueueFull,
}

/// Alias for `Result<T, DriverError>`.
pub type DriverResult<T> = Result<T, DriverError>;

// ── Commands ──────────────────────────────────────────────────────────────────

enum Command {
    Pause { reply: Sender<EngineStatus> },
    Resume { reply: Sender<EngineStatus> },
    TogglePause { reply: Sender<EngineStatus> },
    Status { reply: Sender<EngineStatus> },
    /// `None` steps → the engine config's default burst size.
    FastForward { steps: Option<u32> },
    TriggerRandom { reply: Sender<EngineResult<TriggerOutcome>> },
    InjectDisruption { reply: Sender<EngineResult<TriggerOutcome>> },
    InjectShock { reply: Sender<EngineResult<TriggerOutcome>> },
    Stop { reply: Sender<EngineStatus> },
}

// ── EngineDriver ──────────────────────────────────────────────────────────────

/// Handle to a running engine worker.
///
/// Dropping the driver stops the worker deterministically: the in-flight
/// step finishes, the worker exits, and the thread is joined.
pub struct EngineDriver {
    commands: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl EngineDriver {
    /// Move `engine` onto a named worker thread and start the periodic loop.
    pub fn spawn<S: StateStore>(engine: SimEngine<S>) -> Self {
        let interval = engine.config().tick_interval;
        let (commands, rx) = bounded::<Command>(COMMAND_QUEUE_CAPACITY);

        let worker = thread::Builder::new()
            .name("ln-engine-worker".to_string())
            .spawn(move || worker_loop(engine, interval, rx))
            .expect("failed to spawn ln-engine worker");

        Self {
            commands,
            worker: Some(worker),
        }
    }

    // ── Command API ───────────────────────────────────────────────────────

    /// Pause at the next tick boundary.  Idempotent.
    pub fn pause(&self) -> DriverResult<EngineStatus> {
        self.roundtrip(|reply| Command::Pause { reply })
    }

    /// Resume the periodic loop.  Idempotent.
    pub fn resume(&self) -> DriverResult<EngineStatus> {
        self.roundtrip(|reply| Command::Resume { reply })
    }

    /// Flip the pause flag and return the resulting status.
    pub fn toggle_pause(&self) -> DriverResult<EngineStatus> {
        self.roundtrip(|reply| Command::TogglePause { reply })
    }

    /// Current control-state snapshot.
    ///
    /// Queued behind any in-flight work, so the answer reflects a fully
    /// completed step — never a torn one.
    pub fn status(&self) -> DriverResult<EngineStatus> {
        self.roundtrip(|reply| Command::Status { reply })
    }

    /// Queue a burst of `steps` back-to-back ticks (engine default if
    /// `None`) and return immediately.
    ///
    /// The burst runs regardless of the pause flag.
    pub fn fast_forward(&self, steps: Option<u32>) -> DriverResult<()> {
        self.submit(Command::FastForward { steps })
    }

    /// Run the trigger coin flip (inventory shock vs. disruption).
    pub fn trigger_random(&self) -> DriverResult<EngineResult<TriggerOutcome>> {
        self.roundtrip(|reply| Command::TriggerRandom { reply })
    }

    /// Force the disruption-injection path.
    pub fn inject_disruption(&self) -> DriverResult<EngineResult<TriggerOutcome>> {
        self.roundtrip(|reply| Command::InjectDisruption { reply })
    }

    /// Force the inventory-shock path.
    pub fn inject_shock(&self) -> DriverResult<EngineResult<TriggerOutcome>> {
        self.roundtrip(|reply| Command::InjectShock { reply })
    }

    /// Stop the engine and join the worker.
    ///
    /// Waits for any in-flight step to finish — no torn state on shutdown.
    /// Terminal: the driver is unusable afterwards.
    pub fn stop(&mut self) -> DriverResult<EngineStatus> {
        let result = self.roundtrip(|reply| Command::Stop { reply });
        // Join even when the worker already halted on its own (step error):
        // the thread has exited, but its handle still needs reclaiming.
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        result
    }

    // ── Plumbing ──────────────────────────────────────────────────────────

    fn submit(&self, command: Command) -> DriverResult<()> {
        use crossbeam_channel::TrySendError;
        self.commands.try_send(command).map_err(|err| match err {
            TrySendError::Full(_) => DriverError::QueueFull,
            TrySendError::Disconnected(_) => DriverError::Disconnected,
        })
    }

    fn roundtrip<T>(&self, make: impl FnOnce(Sender<T>) -> Command) -> DriverResult<T> {
        let (tx, rx) = bounded::<T>(1);
        self.submit(make(tx))?;
        rx.recv().map_err(|_| DriverError::Disconnected)
    }
}

impl Drop for EngineDriver {
    fn drop(&mut self) {
        // Deterministic shutdown: ask the worker to stop, then join it.
        if self.worker.is_some() {
            let _ = self.stop();
        }
    }
}

// ── Worker loop ───────────────────────────────────────────────────────────────

fn worker_loop<S: StateStore>(
    mut engine: SimEngine<S>,
    interval: std::time::Duration,
    commands: Receiver<Command>,
) {
    let ticker = crossbeam_channel::tick(interval);
    tracing::info!(interval_ms = interval.as_millis() as u64, "engine worker started");

    loop {
        crossbeam_channel::select! {
            recv(ticker) -> _ => {
                if engine.status().paused {
                    continue;
                }
                match engine.step() {
                    Ok(report) => {
                        tracing::debug!(
                            tick = report.tick.0,
                            restocks = report.restocks.len(),
                            reroutes = report.reroutes.len(),
                            resolved = report.resolved.is_some(),
                            "periodic step",
                        );
                    }
                    Err(err) => {
                        tracing::error!(%err, "simulation step failed; engine worker halting");
                        break;
                    }
                }
            }
            recv(commands) -> msg => {
                let Ok(command) = msg else {
                    // All handles dropped without a Stop; exit quietly.
                    break;
                };
                match command {
                    Command::Pause { reply } => {
                        let _ = reply.send(engine.pause());
                    }
                    Command::Resume { reply } => {
                        let _ = reply.send(engine.resume());
                    }
                    Command::TogglePause { reply } => {
                        let _ = reply.send(engine.toggle_pause());
                    }
                    Command::Status { reply } => {
                        let _ = reply.send(engine.status());
                    }
                    Command::FastForward { steps } => {
                        let steps = steps.unwrap_or(engine.config().fast_forward_default);
                        match engine.fast_forward(steps) {
                            Ok(reports) => {
                                tracing::debug!(steps, final_tick = reports.last().map_or(0, |r| r.tick.0), "fast-forward burst");
                            }
                            Err(err) => {
                                tracing::error!(%err, "fast-forward failed; engine worker halting");
                                break;
                            }
                        }
                    }
                    Command::TriggerRandom { reply } => {
                        let _ = reply.send(engine.trigger_random());
                    }
                    Command::InjectDisruption { reply } => {
                        let _ = reply.send(engine.inject_disruption());
                    }
                    Command::InjectShock { reply } => {
                        let _ = reply.send(engine.inject_inventory_shock());
                    }
                    Command::Stop { reply } => {
                        let status = engine.stop();
                        tracing::info!(tick = status.tick, "engine worker stopped");
                        let _ = reply.send(status);
                        break;
                    }
                }
            }
        }
    }
}
