use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationKind, NotificationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::notification::Notification;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    pub async fn create(
        &self,
        user_id: i32,
        message: String,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Result<Notification, DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            message: ActiveValue::Set(message),
            kind: ActiveValue::Set(kind),
            status: ActiveValue::Set(NotificationStatus::Unread),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(notification))
    }

    /// Lists a user's notifications with the given status, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        status: NotificationStatus,
    ) -> Result<Vec<Notification>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Status.eq(status))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Marks notifications owned by the user as read.
    ///
    /// Ids that do not exist or belong to another user are ignored.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications whose status changed
    pub async fn mark_read(&self, ids: &[i32], user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .set(entity::notification::ActiveModel {
                status: ActiveValue::Set(NotificationStatus::Read),
                ..Default::default()
            })
            .filter(entity::notification::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Status.eq(NotificationStatus::Unread))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Notification>, DbErr> {
        let notification = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(notification.map(Notification::from_entity))
    }

    /// Deletes notifications owned by the user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications deleted
    pub async fn delete(&self, ids: &[i32], user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
