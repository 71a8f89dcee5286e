use super::*;

/// Tests recording a match on a pending request.
///
/// Verifies that the status moves to matched, the version is incremented and the
/// donors are stored in rank order.
///
/// Expected: Ok(true) and the request reloads with the ranked donor list
#[tokio::test]
async fn records_ranked_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let far = factory::user::create_user(db).await?;
    let near = factory::user::create_user(db).await?;

    let repo = BloodRequestRepository::new(db);
    let recorded = repo
        .record_match(request.id, request.version, &[near.id, far.id], Utc::now())
        .await?;

    assert!(recorded);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Matched);
    assert_eq!(stored.version, request.version + 1);
    assert_eq!(stored.matched_donor_ids, vec![near.id, far.id]);

    Ok(())
}

/// Tests that a stale version is rejected.
///
/// Verifies that a second writer holding the version read before the first write
/// does not overwrite the first writer's match list.
///
/// Expected: Ok(false) and the first match list preserved
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let repo = BloodRequestRepository::new(db);
    assert!(
        repo.record_match(request.id, request.version, &[first.id], Utc::now())
            .await?
    );
    let lost = repo
        .record_match(request.id, request.version, &[second.id], Utc::now())
        .await?;

    assert!(!lost);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.matched_donor_ids, vec![first.id]);

    Ok(())
}

/// Tests that re-matching replaces the previous list.
///
/// Expected: Ok(true) and only the new donors stored
#[tokio::test]
async fn replaces_previous_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let old = factory::user::create_user(db).await?;
    let new = factory::user::create_user(db).await?;

    let repo = BloodRequestRepository::new(db);
    repo.record_match(request.id, 0, &[old.id], Utc::now()).await?;
    let recorded = repo.record_match(request.id, 1, &[new.id], Utc::now()).await?;

    assert!(recorded);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.matched_donor_ids, vec![new.id]);
    assert_eq!(stored.version, 2);

    Ok(())
}

/// Tests that terminal requests cannot be matched.
///
/// Expected: Ok(false) for a cancelled request even with the current version
#[tokio::test]
async fn rejects_terminal_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, recipient, hospital, _) =
        factory::helpers::create_request_with_dependencies(db).await?;
    let cancelled =
        factory::blood_request::BloodRequestFactory::new(db, recipient.id, hospital.id)
            .status(RequestStatus::Cancelled)
            .build()
            .await?;
    let donor = factory::user::create_user(db).await?;

    let repo = BloodRequestRepository::new(db);
    let recorded = repo
        .record_match(cancelled.id, cancelled.version, &[donor.id], Utc::now())
        .await?;

    assert!(!recorded);
    let stored = repo.find_by_id(cancelled.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Cancelled);
    assert!(stored.matched_donor_ids.is_empty());

    Ok(())
}
