use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationKind, NotificationStatus};
use sea_orm::ActiveEnum;

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            message: entity.message,
            kind: entity.kind,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            message: self.message,
            kind: self.kind.to_value(),
            status: self.status.to_value(),
            created_at: self.created_at,
        }
    }
}
