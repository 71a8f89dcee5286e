use crate::server::{
    error::AppError,
    service::notification::{
        DbNotificationGateway, NotificationGateway, NotificationService, Notifier,
    },
};
use entity::sea_orm_active_enums::{NotificationKind, NotificationStatus};
use test_utils::{builder::TestBuilder, factory};

use super::gateway::FailingGateway;

mod delete;
mod mark_read;
