//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::Role;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hospital administered by a freshly created hospital admin.
///
/// The admin is attached at position 0, making them the hospital's first admin.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((admin, hospital))` - The admin user and the hospital
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hospital_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::hospital::Model), DbErr> {
    let admin = crate::factory::user::UserFactory::new(db)
        .role(Role::HospitalAdmin)
        .build()
        .await?;
    let hospital = crate::factory::hospital::create_hospital(db).await?;
    crate::factory::hospital::add_hospital_admin(db, hospital.id, admin.id, 0).await?;

    Ok((admin, hospital))
}

/// Creates a pending request together with its hospital, admin and recipient.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((admin, recipient, hospital, request))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_request_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::hospital::Model,
        entity::blood_request::Model,
    ),
    DbErr,
> {
    let (admin, hospital) = create_hospital_with_admin(db).await?;
    let recipient = crate::factory::user::UserFactory::new(db)
        .role(Role::Recipient)
        .build()
        .await?;
    let request = crate::factory::blood_request::create_request(db, recipient.id, hospital.id).await?;

    Ok((admin, recipient, hospital, request))
}
