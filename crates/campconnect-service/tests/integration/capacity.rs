//! Capacity invariant tests under contention.

use campconnect_core::Error;
use campconnect_store::EntityStore;

use crate::common::{TestHarness, camp_draft, identity, students};

#[tokio::test]
async fn test_concurrent_submissions_respect_capacity() {
    let harness = TestHarness::new();
    let camp = harness
        .admin()
        .create_camp(camp_draft(10, 5))
        .await
        .unwrap()
        .camp;

    let mut handles = Vec::new();
    for i in 0..12 {
        let service = harness.registration();
        let camp_id = camp.id;
        let school = format!("School {i}");
        let student = format!("Student {i}");
        handles.push(tokio::spawn(async move {
            service
                .register_students(camp_id, Some(identity(&school)), students(&[&student]))
                .await
        }));
    }

    let outcomes = futures::future::join_all(handles).await;
    let admitted = outcomes
        .into_iter()
        .filter(|o| matches!(o, Ok(Ok(_))))
        .count();

    assert_eq!(admitted, 5, "admissions must exactly fill the capacity");
    assert_eq!(harness.store.participant_count(camp.id).await.unwrap(), 5);
}

#[tokio::test]
async fn test_batch_admission_is_all_or_nothing() {
    // 3 seats remain; a 5-student batch is rejected whole, and the error
    // names the exact remainder.
    let harness = TestHarness::new();
    let camp = harness
        .admin()
        .create_camp(camp_draft(10, 5))
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
            students(&["A", "B", "C", "D", "E"]),
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
    assert_eq!(requested, 5);
    assert_eq!(remaining, 3);

    // Nothing from the oversized batch was admitted.
    assert_eq!(harness.store.participant_count(camp.id).await.unwrap(), 2);

    // A batch of exactly the remainder still fits.
    service
        .register_students(
            camp.id,
            Some(identity("DAV Public School")),
            students(&["A", "B", "C"]),
        )
        .await
        .unwrap();
    assert_eq!(harness.store.participant_count(camp.id).await.unwrap(), 5);
}

#[tokio::test]
async fn test_report_matches_admissions() {
    let harness = TestHarness::new();
    let camp = harness
        .admin()
        .create_camp(camp_draft(10, 60))
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
    service
        .register_students(
            camp.id,
            Some(identity("DAV Public School")),
            students(&["Rohan"]),
        )
        .await
        .unwrap();

    let report = service.camp_wise_report().await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].registered, 3);
    assert_eq!(report[0].schools.len(), 2);
}
