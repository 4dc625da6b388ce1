//! The camp status resolver.
//!
//! Status is a pure function of `(now, start_date, end_date)` and must never
//! be trusted from stale stored state. Every read path that matters for
//! correctness (registration gating in particular) recomputes status through
//! [`resolve_status`]; stored status fields, if a backend chooses to keep
//! any, are an advisory cache only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a camp, derived from its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampStatus {
    /// The camp has not started yet; registration is open.
    Upcoming,
    /// The camp is currently running. New registrations are rejected even
    /// though the camp is, in principle, still collecting participants.
    Ongoing,
    /// The camp has concluded.
    Past,
}

impl CampStatus {
    /// Returns `true` while new registrations are accepted.
    ///
    /// Registration is permitted only strictly before the camp starts; a
    /// camp that has begun is closed even though it has not ended.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, CampStatus::Upcoming)
    }
}

impl fmt::Display for CampStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampStatus::Upcoming => write!(f, "Upcoming"),
            CampStatus::Ongoing => write!(f, "Ongoing"),
            CampStatus::Past => write!(f, "Past"),
        }
    }
}

/// Derives a camp's lifecycle status from its date range and the current
/// time.
///
/// - `now < start` → [`CampStatus::Upcoming`]
/// - `start <= now <= end` → [`CampStatus::Ongoing`]
/// - `now > end` → [`CampStatus::Past`]
///
/// Both boundaries are inclusive on the Ongoing side: at the exact start
/// instant the camp counts as started (and registration as closed), and at
/// the exact end instant it still counts as running.
pub fn resolve_status(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> CampStatus {
    if now < start {
        CampStatus::Upcoming
    } else if now <= end {
        CampStatus::Ongoing
    } else {
        CampStatus::Past
    }
}
