//! Route identifiers and truck→route assignments.
//!
//! Routes are pure names: the simulation models no geography, so a route is
//! nothing more than an entry in the fixed universe `Route 1 ..= Route N`.
//! `RouteId` stores the 1-based route number and round-trips through the wire
//! form `"Route {n}"` used by every persisted document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ── RouteId ───────────────────────────────────────────────────────────────────

/// A named route in the fixed universe.
///
/// `Ord` follows the route number, which makes "lowest-numbered available
/// route" a plain `min`/`find` over sorted collections.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct RouteId(pub u16);

impl RouteId {
    /// The full route universe `Route 1 ..= Route {count}`, ascending.
    pub fn universe(count: u16) -> Vec<RouteId> {
        (1..=count).map(RouteId).collect()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route {}", self.0)
    }
}

/// Error for a string that is not of the form `"Route {n}"`, n ≥ 1.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid route identifier: {0:?}")]
pub struct ParseRouteError(pub String);

impl FromStr for RouteId {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u16 = s
            .strip_prefix("Route ")
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| ParseRouteError(s.to_string()))?;
        if n == 0 {
            return Err(ParseRouteError(s.to_string()));
        }
        Ok(RouteId(n))
    }
}

// Wire form is the display string, not the bare number.
impl Serialize for RouteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RouteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── RouteAssignment ───────────────────────────────────────────────────────────

/// One truck's current route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAssignment {
    pub truck: String,
    pub route: RouteId,
}

/// The routes document: assignments in stable document order.
pub type RoutesDoc = Vec<RouteAssignment>;
