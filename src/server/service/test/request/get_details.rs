use super::*;

/// Tests loading a request with its ranked donor list.
///
/// Expected: Ok(BloodRequest) with donors in rank order
#[tokio::test]
async fn returns_request_with_ranked_donors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, _recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;
    let near = factory::user::create_donor(db, BloodType::OPositive).await?;
    let far = factory::user::create_donor(db, BloodType::OPositive).await?;
    factory::blood_request::add_match(db, request.id, far.id, 1).await?;
    factory::blood_request::add_match(db, request.id, near.id, 0).await?;

    let service = RequestService::new(db, &gateway);
    let details = service
        .get_details(request.id, &User::from_entity(admin))
        .await?;

    assert_eq!(details.id, request.id);
    assert_eq!(details.matched_donor_ids, vec![near.id, far.id]);

    Ok(())
}

/// Tests that the recipient and a matched donor may read the request.
///
/// Expected: Ok(BloodRequest) for both
#[tokio::test]
async fn allows_recipient_and_matched_donor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (_admin, recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;
    let donor = factory::user::create_donor(db, BloodType::OPositive).await?;
    factory::blood_request::add_match(db, request.id, donor.id, 0).await?;

    let service = RequestService::new(db, &gateway);

    for user in [recipient, donor] {
        let details = service
            .get_details(request.id, &User::from_entity(user))
            .await?;
        assert_eq!(details.id, request.id);
    }

    Ok(())
}

/// Tests that users unrelated to the request cannot read it.
///
/// Verifies that a donor who is not matched and an admin of another hospital are
/// both denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unrelated_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (_admin, _recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;
    let stranger = factory::user::create_donor(db, BloodType::OPositive).await?;
    let (other_admin, _other_hospital) = factory::helpers::create_hospital_with_admin(db).await?;

    let service = RequestService::new(db, &gateway);

    for user in [stranger, other_admin] {
        let user_id = user.id;
        let result = service
            .get_details(request.id, &User::from_entity(user))
            .await;

        match result {
            Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, user_id),
            e => panic!("Expected AccessDenied error, got: {:?}", e),
        }
    }

    Ok(())
}

/// Tests loading a request that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let admin = factory::user::UserFactory::new(db)
        .role(Role::SystemAdmin)
        .build()
        .await?;

    let service = RequestService::new(db, &gateway);
    let result = service.get_details(42, &User::from_entity(admin)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
