//! Camp records and creation drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{CampStatus, resolve_status};
use crate::types::ids::CampId;

/// A scheduled multi-day event with capacity and eligibility constraints,
/// published by a district administrator.
///
/// Note that lifecycle status is deliberately absent from this record: it is
/// always derived via [`Camp::status_at`] from the date range and the current
/// time, never persisted as a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camp {
    /// Unique camp identifier.
    pub id: CampId,
    /// Display name of the camp.
    pub name: String,
    /// Free-text description shown to schools.
    pub description: String,
    /// Venue, e.g. "Forest Hills, Pathankot".
    pub location: String,
    /// Districts the camp is advertised to. Never empty.
    pub districts: Vec<String>,
    /// Free-text eligibility criteria.
    pub eligibility_criteria: String,
    /// Name of the camp's contact person.
    pub contact_person: String,
    /// Phone number of the contact person.
    pub contact_number: String,
    /// Contact email for inquiries.
    pub contact_email: String,
    /// When the camp begins. Registration closes at this instant.
    pub start_date: DateTime<Utc>,
    /// When the camp ends. Strictly after `start_date`.
    pub end_date: DateTime<Utc>,
    /// Hard ceiling on the aggregate number of students, across all schools.
    pub max_participants: u32,
}

impl Camp {
    /// Builds a camp record from a validated draft with a fresh id.
    pub fn from_draft(id: CampId, draft: CampDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            location: draft.location,
            districts: draft.districts,
            eligibility_criteria: draft.eligibility_criteria,
            contact_person: draft.contact_person,
            contact_number: draft.contact_number,
            contact_email: draft.contact_email,
            start_date: draft.start_date,
            end_date: draft.end_date,
            max_participants: draft.max_participants,
        }
    }

    /// Derives the camp's lifecycle status at the given instant.
    ///
    /// This is the only sanctioned way to obtain a camp's status; see
    /// [`resolve_status`] for the exact boundary semantics.
    pub fn status_at(&self, now: DateTime<Utc>) -> CampStatus {
        resolve_status(self.start_date, self.end_date, now)
    }

    /// The districts joined for display, e.g. "Pathankot, Gurdaspur".
    pub fn districts_display(&self) -> String {
        self.districts.join(", ")
    }
}

/// Input payload for creating or editing a camp.
///
/// Field-level constraints are enforced by
/// [`validation::validate_camp_draft`](crate::validation::validate_camp_draft)
/// before a [`Camp`] is ever constructed from a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampDraft {
    /// Display name of the camp.
    pub name: String,
    /// Free-text description shown to schools.
    pub description: String,
    /// Venue.
    pub location: String,
    /// Districts the camp is advertised to. Must be non-empty.
    pub districts: Vec<String>,
    /// Free-text eligibility criteria.
    pub eligibility_criteria: String,
    /// Name of the camp's contact person.
    pub contact_person: String,
    /// Phone number of the contact person.
    pub contact_number: String,
    /// Contact email for inquiries.
    pub contact_email: String,
    /// When the camp begins.
    pub start_date: DateTime<Utc>,
    /// When the camp ends. Must be strictly after `start_date`.
    pub end_date: DateTime<Utc>,
    /// Maximum aggregate number of students. Must be positive.
    pub max_participants: u32,
}
