use super::*;

/// Tests deleting owned notifications.
///
/// Expected: Ok(1) for the owner's notification, the other user's kept
#[tokio::test]
async fn deletes_only_owned_notifications() -> Result<(), DbErr> {
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
    let deleted = repo.delete(&[mine.id, theirs.id], user.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_for_user(mine.id, user.id).await?.is_none());
    assert!(repo.find_for_user(theirs.id, other.id).await?.is_some());

    Ok(())
}
