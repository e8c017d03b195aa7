//! Simulation time model.
//!
//! Time is a monotonically increasing [`Tick`] counter advanced once per
//! completed simulation step.  Wall-clock pacing (the delay between periodic
//! steps) is an engine concern and lives in its config, not here.
//!
//! The [`utc_z`] module is the wire format for wall-clock timestamps: the
//! persisted documents require ISO-8601 UTC with a trailing `Z`, which is
//! pinned explicitly rather than left to a library default.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// `true` when this tick lands on an every-`n`-ticks cadence.
    ///
    /// # Panics
    /// Panics if `n` is zero; cadences are validated at config time.
    #[inline]
    pub fn on_cadence(self, n: u64) -> bool {
        self.0 % n == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Wire timestamp format ─────────────────────────────────────────────────────

/// serde adapter for `DateTime<Utc>` fields: ISO-8601 with microseconds and a
/// trailing `Z` (`2026-08-06T09:41:00.123456Z`).
///
/// Use with `#[serde(with = "ln_core::time::utc_z")]`.
pub mod utc_z {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
