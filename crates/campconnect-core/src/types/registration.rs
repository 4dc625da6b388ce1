//! Registration records: one school's submitted batch of students for one
//! camp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ids::{CampId, RegistrationId, SchoolId};

/// A single student entry within a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The student's full name.
    pub name: String,
    /// The father's/guardian's name.
    pub father_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
}

/// The submitting school's identity, resolved from the caller's session by
/// the external identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolIdentity {
    /// The school's account id.
    pub school_id: SchoolId,
    /// The school's display name, denormalized onto the registration.
    pub school_name: String,
}

/// One school's committed batch of students for one camp.
///
/// Immutable once created: there is no edit or cancel operation. Deletion
/// is an administrative action outside the registration contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Unique registration identifier.
    pub id: RegistrationId,
    /// The camp this registration is for.
    pub camp_id: CampId,
    /// The submitting school's account id.
    pub school_id: SchoolId,
    /// The submitting school's name at the time of submission.
    pub school_name: String,
    /// The registered students. Never empty.
    pub students: Vec<Student>,
    /// When the registration was committed.
    pub submitted_at: DateTime<Utc>,
}

impl Registration {
    /// Assembles a registration with a fresh id.
    pub fn new(
        camp_id: CampId,
        identity: SchoolIdentity,
        students: Vec<Student>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RegistrationId::new(),
            camp_id,
            school_id: identity.school_id,
            school_name: identity.school_name,
            students,
            submitted_at: now,
        }
    }

    /// Number of students in this registration.
    ///
    /// A camp's participant count is the sum of this across all of its
    /// registrations; it is never stored on the camp record.
    pub fn student_count(&self) -> u32 {
        self.students.len() as u32
    }
}
