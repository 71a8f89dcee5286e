use super::*;

/// Tests that the first upsert creates the record.
///
/// Expected: Ok(InventoryRecord) with the given quantity and expiry
#[tokio::test]
async fn creates_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    let expiry = Utc::now() + Duration::days(20);

    let repo = InventoryRepository::new(db);
    let record = repo
        .upsert(
            &SetQuantityParams {
                hospital_id: hospital.id,
                blood_type: BloodType::APositive,
                quantity: 3000,
                expiry_date: expiry,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(record.hospital_id, hospital.id);
    assert_eq!(record.blood_type, BloodType::APositive);
    assert_eq!(record.quantity, 3000);

    Ok(())
}

/// Tests that repeating the same upsert keeps a single record.
///
/// Verifies that the unique (hospital, blood type) key makes the second call an
/// overwrite of the same row rather than an insert.
///
/// Expected: same record id and quantity, one row for the hospital
#[tokio::test]
async fn is_idempotent_for_identical_arguments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    let params = SetQuantityParams {
        hospital_id: hospital.id,
        blood_type: BloodType::BPositive,
        quantity: 1500,
        expiry_date: Utc::now() + Duration::days(10),
    };

    let repo = InventoryRepository::new(db);
    let first = repo.upsert(&params, Utc::now()).await?;
    let second = repo.upsert(&params, Utc::now()).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.quantity, second.quantity);
    assert_eq!(first.expiry_date, second.expiry_date);
    assert_eq!(repo.get_by_hospital(hospital.id).await?.len(), 1);

    Ok(())
}

/// Tests that upsert overwrites quantity and expiry of an existing record.
///
/// Expected: Ok(InventoryRecord) carrying the new values
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    let existing =
        factory::blood_inventory::create_inventory(db, hospital.id, BloodType::ONegative, 5000)
            .await?;

    let repo = InventoryRepository::new(db);
    let record = repo
        .upsert(
            &SetQuantityParams {
                hospital_id: hospital.id,
                blood_type: BloodType::ONegative,
                quantity: 800,
                expiry_date: Utc::now() + Duration::days(3),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(record.id, existing.id);
    assert_eq!(record.quantity, 800);
    assert!(record.expiry_date < existing.expiry_date);

    Ok(())
}
