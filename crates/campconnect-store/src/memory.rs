//! In-memory `EntityStore` backend.
//!
//! Tables live behind `tokio::sync::RwLock`s. The registrations table's
//! write lock doubles as the serialization point for the capacity-checked
//! insert: while it is held, no other submission can count or commit, so
//! the read-check-write sequence of
//! [`insert_registration_checked`](EntityStore::insert_registration_checked)
//! is atomic for every camp.

use std::collections::HashMap;
use tokio::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use campconnect_core::{
    Camp, CampId, Error, Registration, RegistrationId, Result, SchoolId, SchoolStatus, SchoolUser,
};

use crate::store::EntityStore;

/// In-memory transactional reference backend.
///
/// Suitable for tests and demos; production deployments implement
/// [`EntityStore`] over a real document or relational store with the same
/// per-camp atomicity guarantee.
#[derive(Debug, Default)]
pub struct MemoryStore {
    camps: RwLock<HashMap<CampId, Camp>>,
    schools: RwLock<HashMap<SchoolId, SchoolUser>>,
    registrations: RwLock<Vec<Registration>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(schools: &HashMap<SchoolId, SchoolUser>, email: &str) -> bool {
    schools
        .values()
        .any(|s| s.school_email.eq_ignore_ascii_case(email))
}

fn count_for_camp(registrations: &[Registration], camp_id: CampId) -> u32 {
    registrations
        .iter()
        .filter(|r| r.camp_id == camp_id)
        .map(Registration::student_count)
        .sum()
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn create_camp(&self, camp: Camp) -> Result<Camp> {
        let mut camps = self.camps.write().await;
        camps.insert(camp.id, camp.clone());
        Ok(camp)
    }

    async fn get_camp(&self, id: CampId) -> Result<Option<Camp>> {
        Ok(self.camps.read().await.get(&id).cloned())
    }

    async fn update_camp(&self, camp: Camp) -> Result<Camp> {
        let mut camps = self.camps.write().await;
        if !camps.contains_key(&camp.id) {
            return Err(Error::camp_not_found(camp.id));
        }
        camps.insert(camp.id, camp.clone());
        Ok(camp)
    }

    async fn delete_camp(&self, id: CampId) -> Result<()> {
        let mut camps = self.camps.write().await;
        if camps.remove(&id).is_none() {
            return Err(Error::camp_not_found(id));
        }
        Ok(())
    }

    async fn list_camps(&self) -> Result<Vec<Camp>> {
        Ok(self.camps.read().await.values().cloned().collect())
    }

    async fn create_school_user(&self, user: SchoolUser) -> Result<SchoolUser> {
        let mut schools = self.schools.write().await;
        if email_taken(&schools, &user.school_email) {
            return Err(Error::validation_field(
                "schoolEmail",
                format!("'{}' is already in use", user.school_email),
            ));
        }
        schools.insert(user.id, user.clone());
        Ok(user)
    }

    async fn create_school_users(&self, users: Vec<SchoolUser>) -> Result<Vec<SchoolUser>> {
        let mut schools = self.schools.write().await;

        // Reject the whole batch before touching the table: against existing
        // records and against duplicates within the batch itself.
        for (index, user) in users.iter().enumerate() {
            let dup_in_batch = users[..index]
                .iter()
                .any(|u| u.school_email.eq_ignore_ascii_case(&user.school_email));
            if dup_in_batch || email_taken(&schools, &user.school_email) {
                return Err(Error::validation_field(
                    "schoolEmail",
                    format!("'{}' is already in use", user.school_email),
                ));
            }
        }

        for user in &users {
            schools.insert(user.id, user.clone());
        }
        debug!(count = users.len(), "Committed school user batch");
        Ok(users)
    }

    async fn get_school_user(&self, id: SchoolId) -> Result<Option<SchoolUser>> {
        Ok(self.schools.read().await.get(&id).cloned())
    }

    async fn find_school_by_email(&self, email: &str) -> Result<Option<SchoolUser>> {
        Ok(self
            .schools
            .read()
            .await
            .values()
            .find(|s| s.school_email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn update_school_status(
        &self,
        id: SchoolId,
        status: SchoolStatus,
    ) -> Result<SchoolUser> {
        let mut schools = self.schools.write().await;
        let user = schools
            .get_mut(&id)
            .ok_or_else(|| Error::school_not_found(id))?;
        user.status = status;
        Ok(user.clone())
    }

    async fn delete_school_user(&self, id: SchoolId) -> Result<()> {
        let mut schools = self.schools.write().await;
        if schools.remove(&id).is_none() {
            return Err(Error::school_not_found(id));
        }
        Ok(())
    }

    async fn list_school_users(&self) -> Result<Vec<SchoolUser>> {
        Ok(self.schools.read().await.values().cloned().collect())
    }

    async fn insert_registration_checked(
        &self,
        camp: &Camp,
        registration: Registration,
    ) -> Result<Registration> {
        // The write lock is the atomic unit: count and insert happen with no
        // other submission interleaved.
        let mut registrations = self.registrations.write().await;

        let current = count_for_camp(&registrations, camp.id);
        let incoming = registration.student_count();
        let remaining = camp.max_participants.saturating_sub(current);

        if incoming > remaining {
            return Err(Error::CapacityExceeded {
                requested: incoming,
                remaining,
            });
        }

        debug!(
            camp_id = %camp.id,
            current,
            incoming,
            "Committing registration"
        );
        registrations.push(registration.clone());
        Ok(registration)
    }

    async fn registrations_for_camp(&self, camp_id: CampId) -> Result<Vec<Registration>> {
        Ok(self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| r.camp_id == camp_id)
            .cloned()
            .collect())
    }

    async fn list_registrations(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.read().await.clone())
    }

    async fn participant_count(&self, camp_id: CampId) -> Result<u32> {
        Ok(count_for_camp(&self.registrations.read().await, camp_id))
    }

    async fn delete_registration(&self, id: RegistrationId) -> Result<()> {
        // Idempotent: deleting an absent registration is a no-op.
        self.registrations.write().await.retain(|r| r.id != id);
        Ok(())
    }
}
