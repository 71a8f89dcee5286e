//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Atomicity requirements (conditional updates, upserts, version checks) are enforced
//! here, in the SQL each repository issues.

pub mod hospital;
pub mod inventory;
pub mod notification;
pub mod request;
pub mod user;
