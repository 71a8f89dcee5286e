use crate::server::{
    data::request::BloodRequestRepository, model::request::CreateBloodRequestParams,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{BloodType, RequestStatus, Urgency};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod record_match;
