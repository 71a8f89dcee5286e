//! Hospital factory for creating test hospitals and their admin lists.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hospitals with customizable fields.
pub struct HospitalFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    longitude: f64,
    latitude: f64,
}

impl<'a> HospitalFactory<'a> {
    /// Creates a new HospitalFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hospital {id}"`
    /// - location: (0, 0)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hospital {}", id),
            address: format!("{} Test Street", id),
            longitude: 0.0,
            latitude: 0.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hospital's coordinates as (longitude, latitude).
    pub fn location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Builds and inserts the hospital entity into the database.
    pub async fn build(self) -> Result<entity::hospital::Model, DbErr> {
        entity::hospital::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hospital at (0, 0) with no admins.
pub async fn create_hospital(db: &DatabaseConnection) -> Result<entity::hospital::Model, DbErr> {
    HospitalFactory::new(db).build().await
}

/// Attaches a user to a hospital's admin list at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `hospital_id` - Hospital to administer
/// - `user_id` - Admin user
/// - `position` - Order within the admin list (0 = first admin)
pub async fn add_hospital_admin(
    db: &DatabaseConnection,
    hospital_id: i32,
    user_id: i32,
    position: i32,
) -> Result<entity::hospital_admin::Model, DbErr> {
    entity::hospital_admin::ActiveModel {
        hospital_id: ActiveValue::Set(hospital_id),
        user_id: ActiveValue::Set(user_id),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}
