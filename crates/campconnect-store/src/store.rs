//! The `EntityStore` trait: persistence contract for camps, school users,
//! and registrations.

use async_trait::async_trait;

use campconnect_core::{
    Camp, CampId, Registration, RegistrationId, Result, SchoolId, SchoolStatus, SchoolUser,
};

/// Persistence operations over the three record types.
///
/// All operations are request/response: nothing here blocks longer than the
/// backing store's own round trip, and there is no cancellation semantic.
/// Backend failures surface as [`Error::Store`](campconnect_core::Error::Store).
///
/// # Atomicity contract
///
/// Two operations carry atomicity requirements beyond plain CRUD:
///
/// - [`insert_registration_checked`](EntityStore::insert_registration_checked)
///   must serialize the capacity count and the insert per camp, so that the
///   sum of committed student counts for a camp never exceeds its
///   `max_participants` even under concurrent submissions.
/// - [`create_school_users`](EntityStore::create_school_users) commits the
///   whole batch or none of it; a failed batch write is one error, never a
///   partial commit.
#[async_trait]
pub trait EntityStore: Send + Sync {
    // ------------------------------------------------------------------
    // Camps
    // ------------------------------------------------------------------

    /// Persists a new camp record.
    async fn create_camp(&self, camp: Camp) -> Result<Camp>;

    /// Fetches a camp by id, `None` if absent.
    async fn get_camp(&self, id: CampId) -> Result<Option<Camp>>;

    /// Replaces an existing camp record. Errors with `CampNotFound` if the
    /// id has no record.
    async fn update_camp(&self, camp: Camp) -> Result<Camp>;

    /// Deletes a camp. Errors with `CampNotFound` if the id has no record.
    async fn delete_camp(&self, id: CampId) -> Result<()>;

    /// All camps, in unspecified order.
    async fn list_camps(&self) -> Result<Vec<Camp>>;

    // ------------------------------------------------------------------
    // School users
    // ------------------------------------------------------------------

    /// Persists a new school user. Errors with a validation failure if the
    /// login email is already taken.
    async fn create_school_user(&self, user: SchoolUser) -> Result<SchoolUser>;

    /// Persists a batch of school users as one unit: either every record is
    /// committed or none are.
    async fn create_school_users(&self, users: Vec<SchoolUser>) -> Result<Vec<SchoolUser>>;

    /// Fetches a school user by id, `None` if absent.
    async fn get_school_user(&self, id: SchoolId) -> Result<Option<SchoolUser>>;

    /// Looks a school user up by its unique login email.
    async fn find_school_by_email(&self, email: &str) -> Result<Option<SchoolUser>>;

    /// Sets a school user's account status. Errors with `SchoolNotFound` if
    /// the id has no record.
    async fn update_school_status(&self, id: SchoolId, status: SchoolStatus)
    -> Result<SchoolUser>;

    /// Deletes a school user. Errors with `SchoolNotFound` if the id has no
    /// record.
    async fn delete_school_user(&self, id: SchoolId) -> Result<()>;

    /// All school users, in unspecified order.
    async fn list_school_users(&self) -> Result<Vec<SchoolUser>>;

    // ------------------------------------------------------------------
    // Registrations
    // ------------------------------------------------------------------

    /// Commits a registration if and only if it fits within the camp's
    /// remaining capacity.
    ///
    /// The capacity check (live recount of all committed student counts for
    /// `camp.id`) and the insert execute as one atomic unit with respect to
    /// other concurrent submissions for the same camp. On overflow the
    /// error is `CapacityExceeded` carrying the exact number of remaining
    /// slots; the batch is never partially admitted.
    async fn insert_registration_checked(
        &self,
        camp: &Camp,
        registration: Registration,
    ) -> Result<Registration>;

    /// All registrations for one camp.
    async fn registrations_for_camp(&self, camp_id: CampId) -> Result<Vec<Registration>>;

    /// All registrations across all camps.
    async fn list_registrations(&self) -> Result<Vec<Registration>>;

    /// Live participant count for a camp: the sum of student-list lengths
    /// across its registrations. Never read from a stored aggregate.
    async fn participant_count(&self, camp_id: CampId) -> Result<u32>;

    /// Removes a registration (administrative action; the registration
    /// record itself is otherwise immutable).
    async fn delete_registration(&self, id: RegistrationId) -> Result<()>;
}
