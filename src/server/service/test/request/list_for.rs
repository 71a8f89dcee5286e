use super::*;

/// Tests role-based request listing.
///
/// Verifies that a recipient sees their own requests, a hospital admin the
/// requests at their hospital, a donor the requests they are matched to and a
/// system admin everything.
///
/// Expected: each role receives its own subset
#[tokio::test]
async fn lists_requests_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, recipient, hospital, own) =
        factory::helpers::create_request_with_dependencies(db).await?;
    let (_other_admin, other_hospital) = factory::helpers::create_hospital_with_admin(db).await?;
    let other_recipient = factory::user::UserFactory::new(db)
        .role(Role::Recipient)
        .build()
        .await?;
    let elsewhere = factory::create_request(db, other_recipient.id, other_hospital.id).await?;
    let same_hospital = factory::create_request(db, other_recipient.id, hospital.id).await?;

    let donor = factory::user::create_donor(db, BloodType::OPositive).await?;
    factory::blood_request::add_match(db, elsewhere.id, donor.id, 0).await?;

    let system_admin = factory::user::UserFactory::new(db)
        .role(Role::SystemAdmin)
        .build()
        .await?;

    let service = RequestService::new(db, &gateway);
    let ids = |requests: Vec<crate::server::model::request::BloodRequest>| {
        let mut ids: Vec<i32> = requests.into_iter().map(|r| r.id).collect();
        ids.sort();
        ids
    };

    assert_eq!(
        ids(service.list_for(&User::from_entity(recipient)).await?),
        vec![own.id]
    );
    assert_eq!(
        ids(service.list_for(&User::from_entity(admin)).await?),
        vec![own.id, same_hospital.id]
    );
    assert_eq!(
        ids(service.list_for(&User::from_entity(donor)).await?),
        vec![elsewhere.id]
    );
    assert_eq!(
        ids(service.list_for(&User::from_entity(system_admin)).await?),
        vec![own.id, elsewhere.id, same_hospital.id]
    );

    Ok(())
}

/// Tests that a hospital admin of no hospital sees nothing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn unattached_hospital_admin_sees_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    factory::helpers::create_request_with_dependencies(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .role(Role::HospitalAdmin)
        .build()
        .await?;

    let service = RequestService::new(db, &gateway);
    let requests = service.list_for(&User::from_entity(admin)).await?;

    assert!(requests.is_empty());

    Ok(())
}
