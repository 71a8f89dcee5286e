//! Notification delivery seam.
//!
//! Components that emit notifications depend on [`NotificationGateway`] rather
//! than on storage, and always call it through a [`Notifier`], which turns every
//! delivery into a best-effort side effect.

use async_trait::async_trait;
use chrono::Utc;
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::Notification,
};

/// Accepts notification requests for a user.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Delivers `message` to `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Notification accepted
    /// - `Ok(None)` - Target user does not exist, nothing delivered
    /// - `Err(AppError)` - Delivery failed
    async fn notify(
        &self,
        user_id: i32,
        message: String,
        kind: NotificationKind,
    ) -> Result<Option<Notification>, AppError>;
}

/// Gateway that stores notifications in the user's inbox table.
#[derive(Clone)]
pub struct DbNotificationGateway {
    db: DatabaseConnection,
}

impl DbNotificationGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationGateway for DbNotificationGateway {
    async fn notify(
        &self,
        user_id: i32,
        message: String,
        kind: NotificationKind,
    ) -> Result<Option<Notification>, AppError> {
        if !UserRepository::new(&self.db).exists(user_id).await? {
            tracing::warn!("Skipping notification for unknown user {}", user_id);
            return Ok(None);
        }

        let notification = NotificationRepository::new(&self.db)
            .create(user_id, message, kind, Utc::now())
            .await?;

        Ok(Some(notification))
    }
}

/// Best-effort wrapper around a gateway.
///
/// Failures are logged and swallowed so that a notification problem never undoes
/// or fails the operation that triggered it.
#[derive(Clone, Copy)]
pub struct Notifier<'a> {
    gateway: &'a dyn NotificationGateway,
}

impl<'a> Notifier<'a> {
    pub fn new(gateway: &'a dyn NotificationGateway) -> Self {
        Self { gateway }
    }

    pub async fn send(
        &self,
        user_id: i32,
        message: String,
        kind: NotificationKind,
    ) -> Option<Notification> {
        match self.gateway.notify(user_id, message, kind).await {
            Ok(Some(notification)) => Some(notification),
            Ok(None) => {
                tracing::warn!("Notification to user {} was skipped", user_id);
                None
            }
            Err(e) => {
                tracing::error!("Failed to notify user {}: {}", user_id, e);
                None
            }
        }
    }
}
