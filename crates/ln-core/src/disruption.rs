//! Disruption records.
//!
//! A disruption blocks exactly one route.  Active disruptions live in a
//! creation-ordered sequence; resolution always removes the head, so
//! insertion order *is* resolution order regardless of kind or severity.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routes::RouteId;
use crate::time::utc_z;

// ── Enums ─────────────────────────────────────────────────────────────────────

/// What kind of event is blocking a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisruptionKind {
    Weather,
    Traffic,
    Accident,
}

impl DisruptionKind {
    pub const ALL: [DisruptionKind; 3] = [
        DisruptionKind::Weather,
        DisruptionKind::Traffic,
        DisruptionKind::Accident,
    ];

    /// Capitalized form used in resolution narration.
    pub fn title_case(self) -> &'static str {
        match self {
            DisruptionKind::Weather => "Weather",
            DisruptionKind::Traffic => "Traffic",
            DisruptionKind::Accident => "Accident",
        }
    }
}

impl fmt::Display for DisruptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisruptionKind::Weather => "weather",
            DisruptionKind::Traffic => "traffic",
            DisruptionKind::Accident => "accident",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(s)
    }
}

// ── Disruption ────────────────────────────────────────────────────────────────

/// A time-stamped event blocking one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disruption {
    #[serde(rename = "type")]
    pub kind: DisruptionKind,
    pub location: RouteId,
    pub severity: Severity,
    #[serde(with = "utc_z")]
    pub timestamp: DateTime<Utc>,
}

/// The disruptions document: strict FIFO, head = oldest.
pub type DisruptionsDoc = VecDeque<Disruption>;
