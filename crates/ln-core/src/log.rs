//! The audit log record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::utc_z;

/// One append-only audit record for a mutating simulation action.
///
/// `details` and `explanation` always carry the same text; both fields stay
/// on the wire because downstream log consumers read either.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "utc_z")]
    pub timestamp: DateTime<Utc>,
    pub agent: String,
    pub action: String,
    pub target: String,
    pub details: String,
    pub explanation: String,
}

impl LogEntry {
    /// Stamp a new entry at the current wall-clock time.
    pub fn new(
        agent: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let explanation = explanation.into();
        Self {
            timestamp: Utc::now(),
            agent: agent.into(),
            action: action.into(),
            target: target.into(),
            details: explanation.clone(),
            explanation,
        }
    }
}

/// The log document: append-only, oldest first.
pub type LogDoc = Vec<LogEntry>;
