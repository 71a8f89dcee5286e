use super::*;

/// Tests fulfilling a matched request.
///
/// Verifies that the recipient, the first admin and every matched donor receive
/// the fulfilment notification meant for them.
///
/// Expected: Ok(BloodRequest) with status fulfilled and four notifications
#[tokio::test]
async fn fulfils_matched_request_and_notifies_everyone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;
    let recipient = factory::user::UserFactory::new(db)
        .role(Role::Recipient)
        .build()
        .await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, recipient.id, hospital.id)
        .status(RequestStatus::Matched)
        .build()
        .await?;
    let donor_1 = factory::user::create_donor(db, BloodType::OPositive).await?;
    let donor_2 = factory::user::create_donor(db, BloodType::OPositive).await?;
    factory::blood_request::add_match(db, request.id, donor_1.id, 0).await?;
    factory::blood_request::add_match(db, request.id, donor_2.id, 1).await?;

    let service = RequestService::new(db, &gateway);
    let updated = service
        .update_status(
            request.id,
            "fulfilled",
            &User::from_entity(admin.clone()),
            Utc::now(),
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::Fulfilled);
    assert_eq!(updated.version, request.version + 1);

    assert_eq!(gateway.sent().len(), 4);
    assert_eq!(
        gateway.sent_to(recipient.id)[0].kind,
        NotificationKind::RequestFulfilled
    );
    let admin_notes = gateway.sent_to(admin.id);
    assert_eq!(admin_notes[0].kind, NotificationKind::RequestFulfilledAdmin);
    assert!(admin_notes[0].message.contains(&request.id.to_string()));
    for donor_id in [donor_1.id, donor_2.id] {
        assert_eq!(
            gateway.sent_to(donor_id)[0].kind,
            NotificationKind::RequestFulfilledDonor
        );
    }

    Ok(())
}

/// Tests a recipient cancelling their own pending request.
///
/// Expected: Ok(BloodRequest) with status cancelled and cancellation notices
#[tokio::test]
async fn recipient_cancels_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;

    let service = RequestService::new(db, &gateway);
    let updated = service
        .update_status(
            request.id,
            "cancelled",
            &User::from_entity(recipient.clone()),
            Utc::now(),
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::Cancelled);
    assert_eq!(
        gateway.sent_to(recipient.id)[0].kind,
        NotificationKind::RequestCancelled
    );
    assert_eq!(
        gateway.sent_to(admin.id)[0].kind,
        NotificationKind::RequestCancelledAdmin
    );

    Ok(())
}

/// Tests that terminal requests reject every further transition.
///
/// Expected: Err(RequestError::InvalidTransition) and status unchanged
#[tokio::test]
async fn rejects_transition_out_of_terminal_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;
    let recipient = factory::user::create_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, recipient.id, hospital.id)
        .status(RequestStatus::Fulfilled)
        .build()
        .await?;
    let actor = User::from_entity(admin);

    let service = RequestService::new(db, &gateway);

    for target in ["pending", "cancelled", "fulfilled"] {
        let result = service
            .update_status(request.id, target, &actor, Utc::now())
            .await;

        match result {
            Err(AppError::RequestErr(RequestError::InvalidTransition { from, .. })) => {
                assert_eq!(from, RequestStatus::Fulfilled);
            }
            other => panic!("Expected InvalidTransition error, got: {:?}", other),
        }
    }

    let stored = service.get_details(request.id, &actor).await?;
    assert_eq!(stored.status, RequestStatus::Fulfilled);
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests that a pending request cannot jump to fulfilled.
///
/// Expected: Err(RequestError::InvalidTransition)
#[tokio::test]
async fn rejects_fulfilling_unmatched_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, _recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;

    let service = RequestService::new(db, &gateway);
    let result = service
        .update_status(request.id, "fulfilled", &User::from_entity(admin), Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::RequestErr(RequestError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Tests an unknown status label.
///
/// Expected: Err(RequestError::InvalidStatus)
#[tokio::test]
async fn rejects_unknown_status_label() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, _recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;

    let service = RequestService::new(db, &gateway);
    let result = service
        .update_status(request.id, "done", &User::from_entity(admin), Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::RequestErr(RequestError::InvalidStatus(_)))
    ));

    Ok(())
}

/// Tests that an unrelated user may not change the status.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unrelated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (_admin, _recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = RequestService::new(db, &gateway);
    let result = service
        .update_status(
            request.id,
            "cancelled",
            &User::from_entity(stranger),
            Utc::now(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that notification failures do not undo the transition.
///
/// Expected: Ok(BloodRequest) with status cancelled
#[tokio::test]
async fn notification_failure_keeps_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = FailingGateway;

    let (admin, _recipient, _hospital, request) =
        factory::helpers::create_request_with_dependencies(db).await?;

    let actor = User::from_entity(admin);

    let service = RequestService::new(db, &gateway);
    let updated = service
        .update_status(request.id, "cancelled", &actor, Utc::now())
        .await?;

    assert_eq!(updated.status, RequestStatus::Cancelled);
    assert_eq!(
        service.get_details(request.id, &actor).await?.status,
        RequestStatus::Cancelled
    );

    Ok(())
}
