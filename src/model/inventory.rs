use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InventoryRecordDto {
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type: String,
    /// Stock on hand in millilitres.
    pub quantity: i32,
    pub expiry_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetInventoryDto {
    pub blood_type: String,
    pub quantity: i32,
    pub expiry_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddUnitsDto {
    pub blood_type: String,
    pub amount: i32,
    pub expiry_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RemoveUnitsDto {
    pub blood_type: String,
    pub amount: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExpireStockResultDto {
    pub removed: u64,
}
