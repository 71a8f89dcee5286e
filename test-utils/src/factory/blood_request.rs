//! Blood request factory for creating test requests.

use chrono::Utc;
use entity::sea_orm_active_enums::{BloodType, RequestStatus, Urgency};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blood requests.
///
/// # Example
///
/// ```rust,ignore
/// let request = BloodRequestFactory::new(&db, recipient.id, hospital.id)
///     .blood_type(BloodType::ONegative)
///     .urgency(Urgency::Critical)
///     .build()
///     .await?;
/// ```
pub struct BloodRequestFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_id: i32,
    hospital_id: i32,
    blood_type: BloodType,
    quantity: i32,
    urgency: Urgency,
    status: RequestStatus,
}

impl<'a> BloodRequestFactory<'a> {
    /// Creates a new BloodRequestFactory with default values.
    ///
    /// Defaults:
    /// - blood_type: `O+`, quantity: 450 ml
    /// - urgency: `Medium`, status: `Pending`
    pub fn new(db: &'a DatabaseConnection, recipient_id: i32, hospital_id: i32) -> Self {
        Self {
            db,
            recipient_id,
            hospital_id,
            blood_type: BloodType::OPositive,
            quantity: 450,
            urgency: Urgency::Medium,
            status: RequestStatus::Pending,
        }
    }

    pub fn blood_type(mut self, blood_type: BloodType) -> Self {
        self.blood_type = blood_type;
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the request entity into the database.
    pub async fn build(self) -> Result<entity::blood_request::Model, DbErr> {
        let now = Utc::now();
        entity::blood_request::ActiveModel {
            recipient_id: ActiveValue::Set(self.recipient_id),
            hospital_id: ActiveValue::Set(self.hospital_id),
            blood_type: ActiveValue::Set(self.blood_type),
            quantity: ActiveValue::Set(self.quantity),
            urgency: ActiveValue::Set(self.urgency),
            status: ActiveValue::Set(self.status),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending O+ request with medium urgency.
pub async fn create_request(
    db: &DatabaseConnection,
    recipient_id: i32,
    hospital_id: i32,
) -> Result<entity::blood_request::Model, DbErr> {
    BloodRequestFactory::new(db, recipient_id, hospital_id)
        .build()
        .await
}

/// Attaches a matched donor to a request at the given rank.
pub async fn add_match(
    db: &DatabaseConnection,
    request_id: i32,
    donor_id: i32,
    rank: i32,
) -> Result<entity::blood_request_match::Model, DbErr> {
    entity::blood_request_match::ActiveModel {
        request_id: ActiveValue::Set(request_id),
        donor_id: ActiveValue::Set(donor_id),
        rank: ActiveValue::Set(rank),
    }
    .insert(db)
    .await
}
