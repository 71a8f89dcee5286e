//! Notifications: the delivery gateway and the user's inbox.

pub mod gateway;

pub use gateway::{DbNotificationGateway, NotificationGateway, Notifier};

use entity::sea_orm_active_enums::NotificationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::Notification,
};

/// Inbox operations for the notifications a user has received.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's notifications with the given status, newest first.
    pub async fn list(
        &self,
        user_id: i32,
        status: NotificationStatus,
    ) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.list_for_user(user_id, status).await?)
    }

    /// Marks one notification as read.
    ///
    /// Marking an already-read notification succeeds without a write.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification in its read state
    /// - `Err(AppError::NotFound)` - Missing, or owned by another user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let Some(mut notification) = repo.find_for_user(id, user_id).await? else {
            return Err(AppError::NotFound(format!(
                "Notification {} not found",
                id
            )));
        };

        if notification.status == NotificationStatus::Unread {
            repo.mark_read(&[id], user_id).await?;
            notification.status = NotificationStatus::Read;
        }

        Ok(notification)
    }

    /// Marks several notifications as read, ignoring ids the user does not own.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that changed from unread to read
    /// - `Err(AppError::BadRequest)` - `ids` is empty
    pub async fn mark_read_bulk(&self, ids: &[i32], user_id: i32) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "At least one notification id is required".to_string(),
            ));
        }

        let repo = NotificationRepository::new(self.db);

        Ok(repo.mark_read(ids, user_id).await?)
    }

    /// Deletes one notification owned by the user.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        if repo.delete(&[id], user_id).await? == 0 {
            return Err(AppError::NotFound(format!(
                "Notification {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Deletes several notifications owned by the user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications deleted
    pub async fn delete_bulk(&self, ids: &[i32], user_id: i32) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let repo = NotificationRepository::new(self.db);

        Ok(repo.delete(ids, user_id).await?)
    }
}
