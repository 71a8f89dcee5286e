use super::*;

/// Tests creating a blood request.
///
/// Verifies that a new request starts pending at version 0 with no matches.
///
/// Expected: Ok(BloodRequest) with status=pending
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recipient = factory::user::create_user(db).await?;
    let hospital = factory::hospital::create_hospital(db).await?;

    let repo = BloodRequestRepository::new(db);
    let request = repo
        .create(
            CreateBloodRequestParams {
                recipient_id: recipient.id,
                hospital_id: hospital.id,
                blood_type: BloodType::ANegative,
                quantity: 900,
                urgency: Urgency::High,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.version, 0);
    assert_eq!(request.blood_type, BloodType::ANegative);
    assert_eq!(request.urgency, Urgency::High);
    assert!(request.matched_donor_ids.is_empty());

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.recipient_id, recipient.id);
    assert_eq!(stored.hospital_id, hospital.id);
    assert_eq!(stored.quantity, 900);

    Ok(())
}
