//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary, and services work exclusively with them. Conversions to API DTOs live
//! here as `into_dto` methods so controllers stay thin.

pub mod hospital;
pub mod inventory;
pub mod notification;
pub mod request;
pub mod user;
