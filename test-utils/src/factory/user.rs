//! User factory for creating test donors, recipients and admins.
//!
//! The defaults describe an eligible O+ donor without location data who has never donated.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BloodType, Role};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let donor = UserFactory::new(&db)
///     .blood_type(BloodType::ONegative)
///     .location(0.1, 0.1)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    email: String,
    role: Role,
    blood_type: BloodType,
    donation_eligibility: bool,
    last_donation_date: Option<DateTime<Utc>>,
    location: Option<(f64, f64)>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"User {id}"`, email: `"user{id}@example.test"`
    /// - role: `Donor`, blood_type: `O+`, eligible, never donated
    /// - location: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("User {}", id),
            email: format!("user{}@example.test", id),
            role: Role::Donor,
            blood_type: BloodType::OPositive,
            donation_eligibility: true,
            last_donation_date: None,
            location: None,
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn blood_type(mut self, blood_type: BloodType) -> Self {
        self.blood_type = blood_type;
        self
    }

    pub fn eligible(mut self, eligible: bool) -> Self {
        self.donation_eligibility = eligible;
        self
    }

    pub fn last_donation_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.last_donation_date = date;
        self
    }

    /// Sets the user's coordinates as (longitude, latitude).
    pub fn location(mut self, longitude: f64, latitude: f64) -> Self {
        self.location = Some((longitude, latitude));
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            blood_type: ActiveValue::Set(self.blood_type),
            donation_eligibility: ActiveValue::Set(self.donation_eligibility),
            last_donation_date: ActiveValue::Set(self.last_donation_date),
            longitude: ActiveValue::Set(self.location.map(|(lng, _)| lng)),
            latitude: ActiveValue::Set(self.location.map(|(_, lat)| lat)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an eligible donor of the given blood type located at (0, 0).
pub async fn create_donor(
    db: &DatabaseConnection,
    blood_type: BloodType,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .blood_type(blood_type)
        .location(0.0, 0.0)
        .build()
        .await
}
