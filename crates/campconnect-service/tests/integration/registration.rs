//! End-to-end registration flow tests.

use chrono::Duration;

use campconnect_core::{CampId, Error};
use campconnect_store::EntityStore;
use tokio_test::assert_ok;

use crate::common::{TestHarness, camp_draft, identity, students};

#[tokio::test]
async fn test_full_registration_flow() {
    let harness = TestHarness::new();
    let outcome = harness.admin().create_camp(camp_draft(10, 60)).await.unwrap();
    let camp = outcome.camp;

    let registration = harness
        .registration()
        .register_students(
            camp.id,
            Some(identity("Sacred Heart Convent School")),
            students(&["Amit Kumar", "Sunita Sharma"]),
        )
        .await;
    let registration = tokio_test::assert_ok!(registration);

    assert_eq!(registration.camp_id, camp.id);
    assert_eq!(registration.student_count(), 2);

    let listed = harness
        .registration()
        .camp_registrations(camp.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, registration.id);
}

#[tokio::test]
async fn test_two_then_one_hits_capacity_exactly() {
    // A camp with two seats admits a two-student batch, then rejects a
    // single further student with zero remaining.
    let harness = TestHarness::new();
    let camp = harness
        .admin()
        .create_camp(camp_draft(10, 2))
        .await
        .unwrap()
        .camp;
    let service = harness.registration();

    service
        .register_students(
            camp.id,
            Some(identity("Sacred Heart Convent School")),
            students(&["Amit", "Sunita"]),
        )
        .await
        .unwrap();

    let err = service
        .register_students(
            camp.id,
            Some(identity("DAV Public School")),
            students(&["Rohan"]),
        )
        .await
        .unwrap_err();
    let Error::CapacityExceeded {
        requested,
        remaining,
    } = err
    else {
        unreachable!("Expected CapacityExceeded");
    };
    assert_eq!(requested, 1);
    assert_eq!(remaining, 0);
    assert_eq!(harness.store.participant_count(camp.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_registration_window_boundary() {
    let harness = TestHarness::new();
    let camp = harness
        .admin()
        .create_camp(camp_draft(10, 60))
        .await
        .unwrap()
        .camp;
    let service = harness.registration();

    service
        .register_students_at(
            camp.id,
            Some(identity("Sacred Heart Convent School")),
            students(&["Amit"]),
            camp.start_date - Duration::seconds(1),
        )
        .await
        .unwrap();

    let err = service
        .register_students_at(
            camp.id,
            Some(identity("DAV Public School")),
            students(&["Rohan"]),
            camp.start_date,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RegistrationClosed { .. }));
}

#[tokio::test]
async fn test_check_order_unknown_camp_wins() {
    // Against an unknown camp even an empty batch reports CampNotFound,
    // not a payload error.
    let harness = TestHarness::new();
    let err = harness
        .registration()
        .register_students(CampId::new(), None, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CampNotFound { .. }));
}

#[tokio::test]
async fn test_browse_reflects_commitments() {
    let harness = TestHarness::new();
    let admin = harness.admin();
    let busy = admin.create_camp(camp_draft(30, 10)).await.unwrap().camp;
    let quiet = admin.create_camp(camp_draft(10, 10)).await.unwrap().camp;

    harness
        .registration()
        .register_students(
            busy.id,
            Some(identity("Spring Dale School")),
            students(&["Amit", "Sunita", "Rohan"]),
        )
        .await
        .unwrap();

    let overviews = harness.registration().browse_camps().await.unwrap();
    assert_eq!(overviews.len(), 2);
    // Newest start date first.
    assert_eq!(overviews[0].camp.id, busy.id);
    assert_eq!(overviews[0].registered, 3);
    assert_eq!(overviews[1].camp.id, quiet.id);
    assert_eq!(overviews[1].registered, 0);
}
