use super::*;

/// Tests listing stock that expires inside a window.
///
/// Expected: records expiring within the window only, soonest first
#[tokio::test]
async fn lists_records_expiring_within_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::create_hospital(db).await?;
    let now = Utc::now();
    for (blood_type, days) in [
        (BloodType::APositive, 5),
        (BloodType::ANegative, 2),
        (BloodType::BPositive, 30),
        (BloodType::BNegative, -1),
    ] {
        factory::blood_inventory::BloodInventoryFactory::new(db, hospital.id, blood_type)
            .expiry_date(now + Duration::days(days))
            .build()
            .await?;
    }

    let repo = InventoryRepository::new(db);
    let expiring = repo
        .get_expiring(hospital.id, now, now + Duration::days(7))
        .await?;

    let types: Vec<BloodType> = expiring.iter().map(|r| r.blood_type).collect();
    assert_eq!(types, vec![BloodType::ANegative, BloodType::APositive]);

    Ok(())
}
