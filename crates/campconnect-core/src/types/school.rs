//! School user accounts and creation drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ids::SchoolId;

/// Account status of a school user.
///
/// Status only gates future login and registration attempts (an external
/// auth concern); a Blocked or Inactive school keeps its existing
/// registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolStatus {
    /// The school can log in and register students.
    Active,
    /// The school is administratively disabled.
    Inactive,
    /// The school is blocked pending administrator review.
    Blocked,
}

impl fmt::Display for SchoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchoolStatus::Active => write!(f, "Active"),
            SchoolStatus::Inactive => write!(f, "Inactive"),
            SchoolStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

/// An account representing a school, created and administered by the
/// district administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolUser {
    /// Unique school identifier.
    pub id: SchoolId,
    /// Display name of the school.
    pub school_name: String,
    /// Street-level location, e.g. "Sarabha Nagar, Ludhiana".
    pub location: String,
    /// The single district the school belongs to.
    pub district: String,
    /// Name of the school principal.
    pub principal_name: String,
    /// Name of the scout/guide trainer.
    pub trainer_name: String,
    /// Phone number of the trainer.
    pub trainer_contact: String,
    /// Login email. Unique across all school users.
    pub school_email: String,
    /// Account status; mutated by the administrator only.
    pub status: SchoolStatus,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl SchoolUser {
    /// Builds an Active school user from a validated draft.
    pub fn from_draft(id: SchoolId, draft: SchoolUserDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            school_name: draft.school_name,
            location: draft.location,
            district: draft.district,
            principal_name: draft.principal_name,
            trainer_name: draft.trainer_name,
            trainer_contact: draft.trainer_contact,
            school_email: draft.school_email,
            status: SchoolStatus::Active,
            created_at: now,
        }
    }
}

/// Input payload for creating a school user, individually or via bulk
/// import. Field names follow the CSV header contract of the bulk upload
/// (`schoolName`, `location`, `district`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolUserDraft {
    /// Display name of the school.
    pub school_name: String,
    /// Street-level location.
    pub location: String,
    /// The single district the school belongs to.
    pub district: String,
    /// Name of the school principal.
    pub principal_name: String,
    /// Name of the scout/guide trainer.
    pub trainer_name: String,
    /// Phone number of the trainer.
    pub trainer_contact: String,
    /// Login email. Must be unique.
    pub school_email: String,
}
