//! The capacity-checked registration service.
//!
//! Schools submit a batch of students for a camp; the service admits the
//! whole batch or rejects it with an actionable error. Preconditions are
//! checked in a fixed order so callers always see the most fundamental
//! failure first:
//!
//! 1. the camp exists,
//! 2. the registration window is open (strictly before the camp starts),
//! 3. the batch fits the remaining capacity,
//! 4. the student payload is well formed,
//! 5. the submitting school is identified.
//!
//! The final commit re-runs the capacity check atomically inside the store
//! (see `EntityStore::insert_registration_checked`), so concurrent
//! submissions can never jointly overshoot `max_participants`.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use campconnect_core::{
    Camp, CampId, CampStatus, Error, Registration, Result, SchoolIdentity, Student,
    validation::validate_students,
};
use campconnect_store::EntityStore;

/// A camp joined with its derived status and live participant count, for the
/// browse surface.
#[derive(Debug, Clone)]
pub struct CampOverview {
    /// The camp record.
    pub camp: Camp,
    /// Lifecycle status derived at listing time.
    pub status: CampStatus,
    /// Committed student count across all registrations.
    pub registered: u32,
}

/// Per-school student tally within one camp's report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolTally {
    /// School display name as denormalized on the registration.
    pub school_name: String,
    /// Students that school has registered.
    pub students: u32,
}

/// One camp's row in the camp-wise participation report.
#[derive(Debug, Clone)]
pub struct CampTally {
    /// The camp id.
    pub camp_id: CampId,
    /// The camp display name.
    pub camp_name: String,
    /// The camp's capacity ceiling.
    pub max_participants: u32,
    /// Committed student count.
    pub registered: u32,
    /// Per-school breakdown, ordered by school name.
    pub schools: Vec<SchoolTally>,
}

/// Accepts and reads registrations against the entity store.
pub struct RegistrationService {
    store: Arc<dyn EntityStore>,
}

impl RegistrationService {
    /// Creates a registration service over the given store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Registers a batch of students for a camp on behalf of a school.
    ///
    /// Admission is all-or-nothing: on success every student in the batch is
    /// committed; on [`Error::CapacityExceeded`] none are, and the error
    /// carries the exact number of remaining slots.
    pub async fn register_students(
        &self,
        camp_id: CampId,
        identity: Option<SchoolIdentity>,
        students: Vec<Student>,
    ) -> Result<Registration> {
        self.register_students_at(camp_id, identity, students, Utc::now())
            .await
    }

    /// [`register_students`](Self::register_students) with an explicit
    /// submission instant, for deterministic window checks.
    pub async fn register_students_at(
        &self,
        camp_id: CampId,
        identity: Option<SchoolIdentity>,
        students: Vec<Student>,
        now: DateTime<Utc>,
    ) -> Result<Registration> {
        let camp = self
            .store
            .get_camp(camp_id)
            .await?
            .ok_or_else(|| Error::camp_not_found(camp_id))?;

        match camp.status_at(now) {
            CampStatus::Upcoming => {}
            CampStatus::Ongoing => {
                return Err(Error::registration_closed("camp has already started"));
            }
            CampStatus::Past => {
                return Err(Error::registration_closed("camp has already concluded"));
            }
        }

        // Advisory capacity check for error ordering; the store's checked
        // insert below is the authoritative one.
        let current = self.store.participant_count(camp_id).await?;
        let requested = students.len() as u32;
        let remaining = camp.max_participants.saturating_sub(current);
        if requested > remaining {
            warn!(
                camp_id = %camp_id,
                requested,
                remaining,
                "Registration rejected: over capacity"
            );
            return Err(Error::CapacityExceeded {
                requested,
                remaining,
            });
        }

        validate_students(&students, now.date_naive())?;

        let identity = identity.ok_or(Error::SchoolNotIdentified)?;

        let registration = Registration::new(camp_id, identity, students, now);
        let committed = self
            .store
            .insert_registration_checked(&camp, registration)
            .await?;

        info!(
            camp_id = %camp_id,
            registration_id = %committed.id,
            school = %committed.school_name,
            students = committed.student_count(),
            "Registration committed"
        );
        Ok(committed)
    }

    /// All camps with derived status and live participant counts, newest
    /// start date first.
    pub async fn browse_camps(&self) -> Result<Vec<CampOverview>> {
        let now = Utc::now();
        let mut camps = self.store.list_camps().await?;
        camps.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        let mut overviews = Vec::with_capacity(camps.len());
        for camp in camps {
            let registered = self.store.participant_count(camp.id).await?;
            overviews.push(CampOverview {
                status: camp.status_at(now),
                registered,
                camp,
            });
        }
        Ok(overviews)
    }

    /// All registrations for one camp. Errors with `CampNotFound` if the
    /// camp does not exist.
    pub async fn camp_registrations(&self, camp_id: CampId) -> Result<Vec<Registration>> {
        if self.store.get_camp(camp_id).await?.is_none() {
            return Err(Error::camp_not_found(camp_id));
        }
        self.store.registrations_for_camp(camp_id).await
    }

    /// The camp-wise participation report: per camp, the committed student
    /// count and its per-school breakdown, newest start date first.
    pub async fn camp_wise_report(&self) -> Result<Vec<CampTally>> {
        let mut camps = self.store.list_camps().await?;
        camps.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        let mut report = Vec::with_capacity(camps.len());
        for camp in camps {
            let registrations = self.store.registrations_for_camp(camp.id).await?;
            let mut by_school: BTreeMap<String, u32> = BTreeMap::new();
            for registration in &registrations {
                *by_school
                    .entry(registration.school_name.clone())
                    .or_default() += registration.student_count();
            }
            let registered = by_school.values().sum();
            report.push(CampTally {
                camp_id: camp.id,
                camp_name: camp.name,
                max_participants: camp.max_participants,
                registered,
                schools: by_school
                    .into_iter()
                    .map(|(school_name, students)| SchoolTally {
                        school_name,
                        students,
                    })
                    .collect(),
            });
        }
        Ok(report)
    }
}
