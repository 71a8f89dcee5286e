//! SeaORM entity models for the blood donation coordination backend.

pub mod prelude;

pub mod blood_inventory;
pub mod blood_request;
pub mod blood_request_match;
pub mod hospital;
pub mod hospital_admin;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod user;
