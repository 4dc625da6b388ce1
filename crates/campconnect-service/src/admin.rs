//! The school/camp administration service.
//!
//! District administrators manage camp records and school user accounts
//! here: camp create/edit/delete with best-effort announcement generation,
//! school account creation with unique login emails, status transitions,
//! password-reset delegation, and CSV bulk onboarding.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use campconnect_core::{
    Camp, CampDraft, CampId, Error, Result, SchoolId, SchoolStatus, SchoolUser, SchoolUserDraft,
    validation::{validate_camp_draft, validate_school_draft},
};
use campconnect_store::EntityStore;

use crate::notify::{NotificationEmail, NotificationGenerator, NotificationRequest};

/// The external identity provider's credential operations.
///
/// CampConnect never stores or resets passwords itself; it only triggers the
/// provider's hosted reset flow for a school's login email.
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    /// Triggers the hosted password-reset flow for the given login email.
    async fn send_password_reset(&self, email: &str) -> Result<()>;
}

/// Scripted credential directory for tests: records reset targets.
#[derive(Debug, Default)]
pub struct MockCredentialDirectory {
    resets: std::sync::Mutex<Vec<String>>,
}

impl MockCredentialDirectory {
    /// Creates an empty mock directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emails a reset was triggered for, in order.
    pub fn resets(&self) -> Vec<String> {
        self.resets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl CredentialDirectory for MockCredentialDirectory {
    async fn send_password_reset(&self, email: &str) -> Result<()> {
        self.resets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(email.to_string());
        Ok(())
    }
}

/// Outcome of a camp create or edit.
#[derive(Debug, Clone)]
pub struct CampSaveOutcome {
    /// The persisted camp record.
    pub camp: Camp,
    /// The drafted announcement, `None` when generation failed or was
    /// skipped. Absence never indicates a failed save.
    pub notification: Option<NotificationEmail>,
}

/// One skipped row in a bulk-import report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    /// 1-based data row number (the header row is not counted).
    pub row: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// Result of a CSV bulk import: what was committed and what was skipped.
#[derive(Debug, Clone)]
pub struct BulkImportReport {
    /// Accounts created, in row order.
    pub created: Vec<SchoolUser>,
    /// Rows skipped with per-row reasons.
    pub skipped: Vec<RowSkip>,
}

/// Administers camps and school user accounts.
pub struct AdminService {
    store: Arc<dyn EntityStore>,
    notifier: Arc<dyn NotificationGenerator>,
    credentials: Arc<dyn CredentialDirectory>,
}

impl AdminService {
    /// Creates an administration service over the given collaborators.
    pub fn new(
        store: Arc<dyn EntityStore>,
        notifier: Arc<dyn NotificationGenerator>,
        credentials: Arc<dyn CredentialDirectory>,
    ) -> Self {
        Self {
            store,
            notifier,
            credentials,
        }
    }

    // ------------------------------------------------------------------
    // Camps
    // ------------------------------------------------------------------

    /// Validates and publishes a new camp, then drafts the announcement
    /// email best-effort.
    pub async fn create_camp(&self, draft: CampDraft) -> Result<CampSaveOutcome> {
        validate_camp_draft(&draft)?;
        let camp = self
            .store
            .create_camp(Camp::from_draft(CampId::new(), draft))
            .await?;
        info!(camp_id = %camp.id, name = %camp.name, "Camp published");
        let notification = self.draft_announcement(&camp).await;
        Ok(CampSaveOutcome { camp, notification })
    }

    /// Validates and saves an edit to an existing camp, then drafts the
    /// announcement email best-effort. Errors with `CampNotFound` if the id
    /// has no record.
    pub async fn update_camp(&self, id: CampId, draft: CampDraft) -> Result<CampSaveOutcome> {
        validate_camp_draft(&draft)?;
        let camp = self.store.update_camp(Camp::from_draft(id, draft)).await?;
        info!(camp_id = %camp.id, name = %camp.name, "Camp updated");
        let notification = self.draft_announcement(&camp).await;
        Ok(CampSaveOutcome { camp, notification })
    }

    /// Deletes a camp record.
    pub async fn delete_camp(&self, id: CampId) -> Result<()> {
        self.store.delete_camp(id).await?;
        info!(camp_id = %id, "Camp deleted");
        Ok(())
    }

    // Announcement generation is advisory: a save never fails because the
    // generator did.
    async fn draft_announcement(&self, camp: &Camp) -> Option<NotificationEmail> {
        match self
            .notifier
            .generate(&NotificationRequest::for_camp(camp))
            .await
        {
            Ok(email) => Some(email),
            Err(err) => {
                warn!(
                    camp_id = %camp.id,
                    error = %err,
                    "Announcement generation failed; camp saved without it"
                );
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // School users
    // ------------------------------------------------------------------

    /// Validates and creates a school user account. The login email must be
    /// unique; the account starts Active.
    pub async fn create_school_user(&self, draft: SchoolUserDraft) -> Result<SchoolUser> {
        validate_school_draft(&draft)?;
        let user = self
            .store
            .create_school_user(SchoolUser::from_draft(SchoolId::new(), draft, Utc::now()))
            .await?;
        info!(school_id = %user.id, email = %user.school_email, "School account created");
        Ok(user)
    }

    /// Sets a school account's status. Existing registrations are not
    /// affected by Inactive or Blocked.
    pub async fn update_school_status(
        &self,
        id: SchoolId,
        status: SchoolStatus,
    ) -> Result<SchoolUser> {
        let user = self.store.update_school_status(id, status).await?;
        info!(school_id = %id, status = %status, "School status updated");
        Ok(user)
    }

    /// Deletes a school user account.
    pub async fn delete_school_user(&self, id: SchoolId) -> Result<()> {
        self.store.delete_school_user(id).await?;
        info!(school_id = %id, "School account deleted");
        Ok(())
    }

    /// All school user accounts.
    pub async fn list_school_users(&self) -> Result<Vec<SchoolUser>> {
        self.store.list_school_users().await
    }

    /// Triggers the identity provider's password-reset flow for a school
    /// account. Errors with `SchoolNotFound` if the id has no record.
    pub async fn reset_school_password(&self, id: SchoolId) -> Result<()> {
        let user = self
            .store
            .get_school_user(id)
            .await?
            .ok_or_else(|| Error::school_not_found(id))?;
        self.credentials
            .send_password_reset(&user.school_email)
            .await?;
        info!(school_id = %id, "Password reset triggered");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bulk import
    // ------------------------------------------------------------------

    /// Imports school accounts from CSV bytes.
    ///
    /// The header row uses the camelCase keys `schoolName, location,
    /// district, principalName, trainerName, trainerContact, schoolEmail`.
    /// Every row is validated independently: malformed or duplicate rows are
    /// skipped and reported, never fatal to the import. All surviving rows
    /// are committed as one all-or-nothing batch with status Active.
    pub async fn bulk_import(&self, csv_bytes: &[u8]) -> Result<BulkImportReport> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv_bytes);

        let mut accepted: Vec<SchoolUser> = Vec::new();
        let mut skipped: Vec<RowSkip> = Vec::new();
        let now = Utc::now();

        for (index, parsed) in reader.deserialize::<SchoolUserDraft>().enumerate() {
            let row = index + 1;
            let draft = match parsed {
                Ok(draft) => draft,
                Err(err) => {
                    skipped.push(RowSkip {
                        row,
                        reason: format!("unparseable row: {err}"),
                    });
                    continue;
                }
            };
            if let Err(err) = validate_school_draft(&draft) {
                skipped.push(RowSkip {
                    row,
                    reason: err.to_string(),
                });
                continue;
            }
            let email_taken_in_batch = accepted
                .iter()
                .any(|u| u.school_email.eq_ignore_ascii_case(&draft.school_email));
            let email_taken_in_store = self
                .store
                .find_school_by_email(&draft.school_email)
                .await?
                .is_some();
            if email_taken_in_batch || email_taken_in_store {
                skipped.push(RowSkip {
                    row,
                    reason: format!("schoolEmail '{}' is already in use", draft.school_email),
                });
                continue;
            }
            accepted.push(SchoolUser::from_draft(SchoolId::new(), draft, now));
        }

        let created = if accepted.is_empty() {
            Vec::new()
        } else {
            self.store.create_school_users(accepted).await?
        };

        info!(
            created = created.len(),
            skipped = skipped.len(),
            "Bulk import finished"
        );
        Ok(BulkImportReport { created, skipped })
    }
}
