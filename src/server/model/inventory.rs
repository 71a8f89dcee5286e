//! Inventory domain models and ledger operation parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BloodType;
use sea_orm::ActiveEnum;

use crate::{
    model::inventory::{AddUnitsDto, InventoryRecordDto, RemoveUnitsDto, SetInventoryDto},
    server::{error::AppError, util::parse::parse_active_enum},
};

/// Stock of one blood type at one hospital.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type: BloodType,
    /// Millilitres on hand, never negative.
    pub quantity: i32,
    pub expiry_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl InventoryRecord {
    pub fn from_entity(entity: entity::blood_inventory::Model) -> Self {
        Self {
            id: entity.id,
            hospital_id: entity.hospital_id,
            blood_type: entity.blood_type,
            quantity: entity.quantity,
            expiry_date: entity.expiry_date,
            last_updated: entity.last_updated,
        }
    }

    pub fn into_dto(self) -> InventoryRecordDto {
        InventoryRecordDto {
            id: self.id,
            hospital_id: self.hospital_id,
            blood_type: self.blood_type.to_value(),
            quantity: self.quantity,
            expiry_date: self.expiry_date,
            last_updated: self.last_updated,
        }
    }
}

/// Overwrites (or creates) the record for a hospital and blood type.
#[derive(Debug, Clone)]
pub struct SetQuantityParams {
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub quantity: i32,
    pub expiry_date: DateTime<Utc>,
}

impl SetQuantityParams {
    pub fn from_dto(hospital_id: i32, dto: SetInventoryDto) -> Result<Self, AppError> {
        Ok(Self {
            hospital_id,
            blood_type: parse_active_enum(&dto.blood_type, "blood_type")?,
            quantity: dto.quantity,
            expiry_date: dto.expiry_date,
        })
    }
}

/// Adds stock, creating the record if it does not exist yet.
#[derive(Debug, Clone)]
pub struct AddUnitsParams {
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub amount: i32,
    pub expiry_date: DateTime<Utc>,
}

impl AddUnitsParams {
    pub fn from_dto(hospital_id: i32, dto: AddUnitsDto) -> Result<Self, AppError> {
        Ok(Self {
            hospital_id,
            blood_type: parse_active_enum(&dto.blood_type, "blood_type")?,
            amount: dto.amount,
            expiry_date: dto.expiry_date,
        })
    }
}

/// Removes stock; never partial.
#[derive(Debug, Clone)]
pub struct RemoveUnitsParams {
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub amount: i32,
}

impl RemoveUnitsParams {
    pub fn from_dto(hospital_id: i32, dto: RemoveUnitsDto) -> Result<Self, AppError> {
        Ok(Self {
            hospital_id,
            blood_type: parse_active_enum(&dto.blood_type, "blood_type")?,
            amount: dto.amount,
        })
    }
}

/// Result of a conditional stock removal.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveUnitsOutcome {
    /// Stock was removed; holds the record after the write.
    Removed(InventoryRecord),
    /// The record holds less than the requested amount and was left untouched.
    Insufficient { available: i32 },
    /// No record exists for the hospital and blood type.
    NotFound,
}
