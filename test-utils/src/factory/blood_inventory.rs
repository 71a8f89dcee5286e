//! Inventory factory for creating test stock records.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::BloodType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inventory records.
pub struct BloodInventoryFactory<'a> {
    db: &'a DatabaseConnection,
    hospital_id: i32,
    blood_type: BloodType,
    quantity: i32,
    expiry_date: DateTime<Utc>,
}

impl<'a> BloodInventoryFactory<'a> {
    /// Creates a new BloodInventoryFactory with default values.
    ///
    /// Defaults:
    /// - quantity: 5000 ml
    /// - expiry_date: 30 days from now
    pub fn new(db: &'a DatabaseConnection, hospital_id: i32, blood_type: BloodType) -> Self {
        Self {
            db,
            hospital_id,
            blood_type,
            quantity: 5000,
            expiry_date: Utc::now() + Duration::days(30),
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn expiry_date(mut self, expiry_date: DateTime<Utc>) -> Self {
        self.expiry_date = expiry_date;
        self
    }

    /// Builds and inserts the inventory record into the database.
    pub async fn build(self) -> Result<entity::blood_inventory::Model, DbErr> {
        entity::blood_inventory::ActiveModel {
            hospital_id: ActiveValue::Set(self.hospital_id),
            blood_type: ActiveValue::Set(self.blood_type),
            quantity: ActiveValue::Set(self.quantity),
            expiry_date: ActiveValue::Set(self.expiry_date),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inventory record with the given quantity and a 30 day expiry.
pub async fn create_inventory(
    db: &DatabaseConnection,
    hospital_id: i32,
    blood_type: BloodType,
    quantity: i32,
) -> Result<entity::blood_inventory::Model, DbErr> {
    BloodInventoryFactory::new(db, hospital_id, blood_type)
        .quantity(quantity)
        .build()
        .await
}
