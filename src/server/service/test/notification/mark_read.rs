use super::*;

/// Tests marking a single notification as read.
///
/// Expected: Ok(Notification) with status read; it leaves the unread list
#[tokio::test]
async fn marks_owned_notification_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);
    let updated = service.mark_read(notification.id, user.id).await?;

    assert_eq!(updated.status, NotificationStatus::Read);
    assert!(service
        .list(user.id, NotificationStatus::Unread)
        .await?
        .is_empty());

    // Marking again is a no-op success
    let again = service.mark_read(notification.id, user.id).await?;
    assert_eq!(again.status, NotificationStatus::Read);

    Ok(())
}

/// Tests marking another user's notification.
///
/// Expected: Err(AppError::NotFound) and the notification stays unread
#[tokio::test]
async fn fails_for_notification_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let service = NotificationService::new(db);
    let result = service.mark_read(notification.id, other.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        service
            .list(owner.id, NotificationStatus::Unread)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests bulk marking.
///
/// Expected: Ok(count of changed notifications); BadRequest for an empty id list
#[tokio::test]
async fn marks_many_and_rejects_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::create_notification(db, user.id).await?;
    let second = factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);

    assert_eq!(
        service.mark_read_bulk(&[first.id, second.id], user.id).await?,
        2
    );

    let empty = service.mark_read_bulk(&[], user.id).await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    Ok(())
}
