//! Common test utilities and harness for the service integration tests.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use campconnect_core::{CampDraft, SchoolId, SchoolIdentity, SchoolUserDraft, Student};
use campconnect_service::{
    AdminService, CredentialDirectory, MockCredentialDirectory, MockNotificationGenerator,
    NotificationGenerator, RegistrationService,
};
use campconnect_store::{EntityStore, MemoryStore};

/// Test harness wiring the services over the in-memory store with mock
/// collaborators.
pub struct TestHarness {
    /// The shared backing store.
    pub store: Arc<MemoryStore>,
    /// Mock announcement generator.
    pub notifier: Arc<MockNotificationGenerator>,
    /// Mock identity-provider credential directory.
    pub credentials: Arc<MockCredentialDirectory>,
}

impl TestHarness {
    /// Creates a harness with a succeeding notification generator.
    pub fn new() -> Self {
        Self::with_notifier(MockNotificationGenerator::new())
    }

    /// Creates a harness whose notification generator always fails.
    pub fn with_failing_notifier() -> Self {
        Self::with_notifier(MockNotificationGenerator::failing())
    }

    fn with_notifier(notifier: MockNotificationGenerator) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("campconnect_service=debug,campconnect_store=debug")
            .try_init();
        Self {
            store: Arc::new(MemoryStore::new()),
            notifier: Arc::new(notifier),
            credentials: Arc::new(MockCredentialDirectory::new()),
        }
    }

    /// A registration service over the harness store.
    pub fn registration(&self) -> RegistrationService {
        RegistrationService::new(Arc::clone(&self.store) as Arc<dyn EntityStore>)
    }

    /// An administration service over the harness store and mocks.
    pub fn admin(&self) -> AdminService {
        AdminService::new(
            Arc::clone(&self.store) as Arc<dyn EntityStore>,
            Arc::clone(&self.notifier) as Arc<dyn NotificationGenerator>,
            Arc::clone(&self.credentials) as Arc<dyn CredentialDirectory>,
        )
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid camp draft starting `start_in_days` from now with the given
/// capacity.
pub fn camp_draft(start_in_days: i64, max_participants: u32) -> CampDraft {
    let now = Utc::now();
    CampDraft {
        name: "Summer Scout Adventure".to_string(),
        description: "A week-long adventure camp with trekking and nature studies.".to_string(),
        location: "Forest Hills, Pathankot".to_string(),
        districts: vec!["Pathankot".to_string(), "Gurdaspur".to_string()],
        eligibility_criteria: "Scouts and Guides aged 12-16.".to_string(),
        contact_person: "Rohan Sharma".to_string(),
        contact_number: "9876543210".to_string(),
        contact_email: "rohan.sharma@example.com".to_string(),
        start_date: now + Duration::days(start_in_days),
        end_date: now + Duration::days(start_in_days + 7),
        max_participants,
    }
}

/// A valid school user draft with the given login email.
pub fn school_draft(name: &str, email: &str) -> SchoolUserDraft {
    SchoolUserDraft {
        school_name: name.to_string(),
        location: "Sector 51, Mohali".to_string(),
        district: "Mohali".to_string(),
        principal_name: "Mr. Harish Dhillon".to_string(),
        trainer_name: "Mr. Manpreet Singh".to_string(),
        trainer_contact: "8877665544".to_string(),
        school_email: email.to_string(),
    }
}

/// A school identity for submitting registrations.
pub fn identity(school_name: &str) -> SchoolIdentity {
    SchoolIdentity {
        school_id: SchoolId::new(),
        school_name: school_name.to_string(),
    }
}

/// Students with the given names and plausible birth dates.
pub fn students(names: &[&str]) -> Vec<Student> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Student {
            name: name.to_string(),
            father_name: format!("Father of {name}"),
            date_of_birth: NaiveDate::from_ymd_opt(2008, 1, 1)
                .map(|d| d + Duration::days(i as i64 * 37))
                .unwrap_or(NaiveDate::MIN),
        })
        .collect()
}
