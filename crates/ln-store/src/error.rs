//! Error types for ln-store.

use thiserror::Error;

use crate::store::Domain;

/// Errors raised by a state store backend.
///
/// `Malformed` is the data-integrity case: a document that loaded but does
/// not deserialize (missing `stock`, an unknown severity, …).  It always
/// propagates to the caller — the simulation never repairs or skips a broken
/// document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {domain} store: {source}")]
    Io {
        domain: Domain,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {domain} document: {source}")]
    Malformed {
        domain: Domain,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on store directory: {0}")]
    Dir(#[source] std::io::Error),
}

impl StoreError {
    /// The domain the failing operation targeted, if it targeted one.
    pub fn domain(&self) -> Option<Domain> {
        match self {
            StoreError::Io { domain, .. } | StoreError::Malformed { domain, .. } => Some(*domain),
            StoreError::Dir(_) => None,
        }
    }
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
