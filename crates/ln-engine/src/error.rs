//! Engine error type.

use thiserror::Error;

use ln_store::StoreError;

/// Errors surfaced by [`SimEngine`](crate::SimEngine) operations.
///
/// Store failures during an agent's read-modify-write are fatal to the
/// operation and propagate unchanged; audit-log append failures are *not*
/// routed here (the engine reports them via `tracing` and keeps the tick's
/// in-memory result).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("engine configuration error: {0}")]
    Config(String),
}

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;
