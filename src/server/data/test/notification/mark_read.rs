use super::*;

/// Tests marking owned notifications as read.
///
/// Verifies that notifications of another user are not touched even when their
/// id is passed.
///
/// Expected: Ok(count of the caller's unread notifications)
#[tokio::test]
async fn marks_only_owned_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let mine = factory::notification::create_notification(db, user.id).await?;
    let theirs = factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let changed = repo.mark_read(&[mine.id, theirs.id], user.id).await?;

    assert_eq!(changed, 1);
    let stored = repo.find_for_user(mine.id, user.id).await?.unwrap();
    assert_eq!(stored.status, NotificationStatus::Read);
    let untouched = repo.find_for_user(theirs.id, other.id).await?.unwrap();
    assert_eq!(untouched.status, NotificationStatus::Unread);

    Ok(())
}

/// Tests that already-read notifications are not counted again.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn does_not_count_already_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_read(&[notification.id], user.id).await?, 1);
    assert_eq!(repo.mark_read(&[notification.id], user.id).await?, 0);

    Ok(())
}
