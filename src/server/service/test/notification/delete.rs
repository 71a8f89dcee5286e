use super::*;

/// Tests deleting one notification.
///
/// Expected: Ok(()) the first time, Err(AppError::NotFound) the second time
#[tokio::test]
async fn deletes_owned_notification_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);

    service.delete(notification.id, user.id).await?;
    let result = service.delete(notification.id, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests bulk deletion scoped to the owner.
///
/// Expected: Ok(1) with the other user's notification kept
#[tokio::test]
async fn deletes_many_owned_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let mine = factory::create_notification(db, user.id).await?;
    let theirs = factory::create_notification(db, other.id).await?;

    let service = NotificationService::new(db);
    let deleted = service.delete_bulk(&[mine.id, theirs.id], user.id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(
        service
            .list(other.id, NotificationStatus::Unread)
            .await?
            .len(),
        1
    );

    Ok(())
}
