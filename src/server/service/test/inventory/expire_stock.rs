use super::*;

/// Tests the expiry sweep for one hospital.
///
/// Verifies that with one expired and one valid record, the first sweep removes
/// exactly the expired one and the second sweep removes nothing.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn removes_expired_record_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();
    let now = Utc::now();

    let (_admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;
    factory::blood_inventory::BloodInventoryFactory::new(db, hospital.id, BloodType::APositive)
        .expiry_date(now - Duration::days(1))
        .build()
        .await?;
    factory::blood_inventory::BloodInventoryFactory::new(db, hospital.id, BloodType::ONegative)
        .expiry_date(now + Duration::days(1))
        .build()
        .await?;

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);

    assert_eq!(service.expire_stock(hospital.id, now).await?, 1);
    assert_eq!(service.expire_stock(hospital.id, now).await?, 0);

    let remaining = service.get_inventory(hospital.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].blood_type, BloodType::ONegative);

    Ok(())
}

/// Tests sweeping a hospital that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_hospital() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);
    let result = service.expire_stock(7, Utc::now()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the sweep across all hospitals.
///
/// Verifies that the total covers every hospital and each affected hospital's
/// first admin receives one summary alert.
///
/// Expected: Ok(3), one alert per affected hospital, then Ok(0)
#[tokio::test]
async fn expire_all_sweeps_every_hospital() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();
    let now = Utc::now();

    let (admin_a, hospital_a) = factory::helpers::create_hospital_with_admin(db).await?;
    let (admin_b, hospital_b) = factory::helpers::create_hospital_with_admin(db).await?;
    let (admin_c, hospital_c) = factory::helpers::create_hospital_with_admin(db).await?;

    for blood_type in [BloodType::APositive, BloodType::BPositive] {
        factory::blood_inventory::BloodInventoryFactory::new(db, hospital_a.id, blood_type)
            .expiry_date(now - Duration::hours(2))
            .build()
            .await?;
    }
    factory::blood_inventory::BloodInventoryFactory::new(db, hospital_b.id, BloodType::OPositive)
        .expiry_date(now - Duration::hours(2))
        .build()
        .await?;
    factory::create_inventory(db, hospital_c.id, BloodType::OPositive, 3000).await?;

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);

    assert_eq!(service.expire_all(now).await?, 3);
    assert_eq!(gateway.sent_to(admin_a.id).len(), 1);
    assert!(gateway.sent_to(admin_a.id)[0].message.contains("2 inventory record"));
    assert_eq!(gateway.sent_to(admin_b.id).len(), 1);
    assert!(gateway.sent_to(admin_c.id).is_empty());

    assert_eq!(service.expire_all(now).await?, 0);
    assert_eq!(gateway.sent().len(), 2);

    Ok(())
}
