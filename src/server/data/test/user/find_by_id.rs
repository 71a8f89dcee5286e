use super::*;

/// Tests finding an existing user.
///
/// Verifies that the repository converts the stored user into the domain model
/// with role and blood type intact.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .role(Role::HospitalAdmin)
        .blood_type(BloodType::AbNegative)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.role, Role::HospitalAdmin);
    assert_eq!(user.blood_type, BloodType::AbNegative);
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(4242).await?.is_none());
    assert!(!repo.exists(4242).await?);

    Ok(())
}
