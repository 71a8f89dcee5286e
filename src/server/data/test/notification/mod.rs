use crate::server::data::notification::NotificationRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{NotificationKind, NotificationStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod mark_read;
