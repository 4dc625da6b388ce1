//! CSV bulk-import tests.

use campconnect_core::SchoolStatus;
use campconnect_store::EntityStore;

use crate::common::{TestHarness, school_draft};

const HEADER: &str =
    "schoolName,location,district,principalName,trainerName,trainerContact,schoolEmail\n";

#[tokio::test]
async fn test_import_commits_good_rows_and_reports_bad_one() {
    let harness = TestHarness::new();
    let csv = format!(
        "{HEADER}\
        DAV Public School,Model Town,Ludhiana,Dr. Anil Gupta,Ms. Kiran Bala,9876501234,dav.ldh@example.com\n\
        Sacred Heart Convent School,Sarabha Nagar,Ludhiana,Mrs. Nirmala Reddy,Mr. Rajesh Kumar,9988776655,not-an-email\n\
        Spring Dale School,Majitha Road,Amritsar,Mr. Rajiv Sharma,Ms. Simran Kaur,9876512345,springdale.asr@example.com\n\
        Yadavindra Public School,Sector 51,Mohali,Mr. Harish Dhillon,Mr. Manpreet Singh,8877665544,info@ypsmohali.in\n\
        Govt Senior Secondary School,Civil Lines,Patiala,Mr. Baldev Raj,Mrs. Paramjit Kaur,9876523456,gsss.patiala@example.com\n"
    );

    let report = harness.admin().bulk_import(csv.as_bytes()).await.unwrap();

    assert_eq!(report.created.len(), 4);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].row, 2);
    assert!(report.skipped[0].reason.contains("schoolEmail"));
    assert!(report.created.iter().all(|u| u.status == SchoolStatus::Active));
    assert_eq!(harness.store.list_school_users().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_import_skips_emails_already_registered() {
    let harness = TestHarness::new();
    harness
        .admin()
        .create_school_user(school_draft("DAV Public School", "dav.ldh@example.com"))
        .await
        .unwrap();

    let csv = format!(
        "{HEADER}\
        DAV Public School,Model Town,Ludhiana,Dr. Anil Gupta,Ms. Kiran Bala,9876501234,DAV.LDH@example.com\n\
        Spring Dale School,Majitha Road,Amritsar,Mr. Rajiv Sharma,Ms. Simran Kaur,9876512345,springdale.asr@example.com\n"
    );

    let report = harness.admin().bulk_import(csv.as_bytes()).await.unwrap();
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].school_name, "Spring Dale School");
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].reason.contains("already in use"));
}

#[tokio::test]
async fn test_import_reports_unparseable_rows() {
    let harness = TestHarness::new();
    // Second data row is truncated.
    let csv = format!(
        "{HEADER}\
        DAV Public School,Model Town,Ludhiana,Dr. Anil Gupta,Ms. Kiran Bala,9876501234,dav.ldh@example.com\n\
        Spring Dale School,Majitha Road\n"
    );

    let report = harness.admin().bulk_import(csv.as_bytes()).await.unwrap();
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].row, 2);
    assert!(report.skipped[0].reason.contains("unparseable"));
}

#[tokio::test]
async fn test_empty_import_creates_nothing() {
    let harness = TestHarness::new();
    let report = harness.admin().bulk_import(HEADER.as_bytes()).await.unwrap();
    assert!(report.created.is_empty());
    assert!(report.skipped.is_empty());
    assert!(harness.store.list_school_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_imported_accounts_can_log_in_by_email() {
    let harness = TestHarness::new();
    let csv = format!(
        "{HEADER}\
        Spring Dale School,Majitha Road,Amritsar,Mr. Rajiv Sharma,Ms. Simran Kaur,9876512345,springdale.asr@example.com\n"
    );
    harness.admin().bulk_import(csv.as_bytes()).await.unwrap();

    let found = harness
        .store
        .find_school_by_email("springdale.asr@example.com")
        .await
        .unwrap();
    assert!(found.is_some());
}
