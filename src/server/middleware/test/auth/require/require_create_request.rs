use super::*;

/// Tests that recipients may create requests.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_recipient() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(Role::Recipient)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::CreateRequest]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that donors may not create requests.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_donor() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let donor = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(donor.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::CreateRequest]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, donor.id)
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
