use super::*;

/// Tests removing less than the stock on hand.
///
/// Expected: Ok(Removed) with the reduced quantity
#[tokio::test]
async fn removes_available_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    factory::blood_inventory::create_inventory(db, hospital.id, BloodType::APositive, 2500).await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .remove_units(hospital.id, BloodType::APositive, 600, Utc::now())
        .await?;

    match outcome {
        RemoveUnitsOutcome::Removed(record) => assert_eq!(record.quantity, 1900),
        other => panic!("expected Removed, got {:?}", other),
    }

    Ok(())
}

/// Tests removing exactly the stock on hand leaves an empty record.
///
/// Expected: Ok(Removed) with quantity 0
#[tokio::test]
async fn removes_entire_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    factory::blood_inventory::create_inventory(db, hospital.id, BloodType::OPositive, 700).await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .remove_units(hospital.id, BloodType::OPositive, 700, Utc::now())
        .await?;

    assert!(matches!(outcome, RemoveUnitsOutcome::Removed(ref r) if r.quantity == 0));

    Ok(())
}

/// Tests that removing more than is on hand changes nothing.
///
/// Expected: Ok(Insufficient { available }) and quantity unchanged
#[tokio::test]
async fn rejects_removal_beyond_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    factory::blood_inventory::create_inventory(db, hospital.id, BloodType::APositive, 1900).await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .remove_units(hospital.id, BloodType::APositive, 2000, Utc::now())
        .await?;

    assert_eq!(outcome, RemoveUnitsOutcome::Insufficient { available: 1900 });
    let stored = repo.find(hospital.id, BloodType::APositive).await?.unwrap();
    assert_eq!(stored.quantity, 1900);

    Ok(())
}

/// Tests removing from a blood type the hospital does not stock.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn reports_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;

    let repo = InventoryRepository::new(db);
    let outcome = repo
        .remove_units(hospital.id, BloodType::AbNegative, 100, Utc::now())
        .await?;

    assert_eq!(outcome, RemoveUnitsOutcome::NotFound);

    Ok(())
}
