use super::*;

fn params(hospital_id: i32, quantity: i32, expiry_days: i64) -> SetQuantityParams {
    SetQuantityParams {
        hospital_id,
        blood_type: BloodType::OPositive,
        quantity,
        expiry_date: Utc::now() + Duration::days(expiry_days),
    }
}

/// Tests that setting the same quantity twice yields the same record.
///
/// Expected: identical id, quantity and expiry on both calls
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (_admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;
    let params = params(hospital.id, 4000, 20);

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);
    let first = service.set_quantity(params.clone(), Utc::now()).await?;
    let second = service.set_quantity(params, Utc::now()).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.quantity, second.quantity);
    assert_eq!(first.expiry_date, second.expiry_date);
    assert_eq!(service.get_inventory(hospital.id).await?.len(), 1);

    Ok(())
}

/// Tests the low-stock alert boundaries.
///
/// Verifies that 1500 ml alerts, while 2000 ml (the threshold itself) and 0 ml
/// do not.
///
/// Expected: exactly one alert
#[tokio::test]
async fn alerts_only_strictly_between_zero_and_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);
    service
        .set_quantity(params(hospital.id, 2000, 5), Utc::now())
        .await?;
    service
        .set_quantity(params(hospital.id, 0, 5), Utc::now())
        .await?;
    service
        .set_quantity(params(hospital.id, 1500, 5), Utc::now())
        .await?;

    let alerts = gateway.sent_to(admin.id);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].message.contains("1500ml"));

    Ok(())
}

/// Tests a configured threshold.
///
/// Expected: 2500 ml alerts when the threshold is 3000 ml
#[tokio::test]
async fn honours_configured_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;

    let service = InventoryService::new(db, &gateway, 3000);
    service
        .set_quantity(params(hospital.id, 2500, 5), Utc::now())
        .await?;

    assert_eq!(gateway.sent_to(admin.id).len(), 1);

    Ok(())
}

/// Tests low stock at a hospital without admins.
///
/// Expected: Ok(InventoryRecord) and no notification
#[tokio::test]
async fn low_stock_without_admins_still_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let hospital = factory::create_hospital(db).await?;

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);
    let record = service
        .set_quantity(params(hospital.id, 100, 5), Utc::now())
        .await?;

    assert_eq!(record.quantity, 100);
    assert!(gateway.sent().is_empty());

    Ok(())
}

/// Tests input validation.
///
/// Expected: InvalidQuantity for a negative quantity, ExpiryInPast for a past
/// date, NotFound for an unknown hospital
#[tokio::test]
async fn validates_input() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let (_admin, hospital) = factory::helpers::create_hospital_with_admin(db).await?;

    let service = InventoryService::new(db, &gateway, DEFAULT_LOW_STOCK_THRESHOLD);

    let negative = service
        .set_quantity(params(hospital.id, -1, 5), Utc::now())
        .await;
    assert!(matches!(
        negative,
        Err(AppError::InventoryErr(InventoryError::InvalidQuantity(-1)))
    ));

    let expired = service
        .set_quantity(params(hospital.id, 100, -1), Utc::now())
        .await;
    assert!(matches!(
        expired,
        Err(AppError::InventoryErr(InventoryError::ExpiryInPast))
    ));

    let missing = service.set_quantity(params(999, 100, 5), Utc::now()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    assert!(service.get_inventory(hospital.id).await?.is_empty());

    Ok(())
}
