use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BloodType;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::inventory::{
    AddUnitsParams, InventoryRecord, RemoveUnitsOutcome, SetQuantityParams,
};

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        hospital_id: i32,
        blood_type: BloodType,
    ) -> Result<Option<InventoryRecord>, DbErr> {
        let record = entity::prelude::BloodInventory::find()
            .filter(entity::blood_inventory::Column::HospitalId.eq(hospital_id))
            .filter(entity::blood_inventory::Column::BloodType.eq(blood_type))
            .one(self.db)
            .await?;

        Ok(record.map(InventoryRecord::from_entity))
    }

    /// All records held by a hospital, ordered by blood type.
    pub async fn get_by_hospital(&self, hospital_id: i32) -> Result<Vec<InventoryRecord>, DbErr> {
        let records = entity::prelude::BloodInventory::find()
            .filter(entity::blood_inventory::Column::HospitalId.eq(hospital_id))
            .order_by_asc(entity::blood_inventory::Column::BloodType)
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(InventoryRecord::from_entity).collect())
    }

    /// Records expiring within `[from, until]`, soonest first.
    pub async fn get_expiring(
        &self,
        hospital_id: i32,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<InventoryRecord>, DbErr> {
        let records = entity::prelude::BloodInventory::find()
            .filter(entity::blood_inventory::Column::HospitalId.eq(hospital_id))
            .filter(entity::blood_inventory::Column::ExpiryDate.gte(from))
            .filter(entity::blood_inventory::Column::ExpiryDate.lte(until))
            .order_by_asc(entity::blood_inventory::Column::ExpiryDate)
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(InventoryRecord::from_entity).collect())
    }

    /// Creates or overwrites the record keyed by (hospital, blood type).
    ///
    /// Issued as a single `INSERT ... ON CONFLICT DO UPDATE` against the unique key.
    pub async fn upsert(
        &self,
        params: &SetQuantityParams,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, DbErr> {
        entity::prelude::BloodInventory::insert(entity::blood_inventory::ActiveModel {
            hospital_id: ActiveValue::Set(params.hospital_id),
            blood_type: ActiveValue::Set(params.blood_type),
            quantity: ActiveValue::Set(params.quantity),
            expiry_date: ActiveValue::Set(params.expiry_date),
            last_updated: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::blood_inventory::Column::HospitalId,
                entity::blood_inventory::Column::BloodType,
            ])
            .update_columns([
                entity::blood_inventory::Column::Quantity,
                entity::blood_inventory::Column::ExpiryDate,
                entity::blood_inventory::Column::LastUpdated,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(params.hospital_id, params.blood_type)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Inventory record for hospital {} not found after upsert",
                    params.hospital_id
                ))
            })
    }

    /// Increments stock, creating the record when absent.
    ///
    /// The record keeps the later of its current and the incoming expiry date. The
    /// increment itself is an in-place `quantity = quantity + amount`, so concurrent
    /// additions never lose units.
    pub async fn add_units(
        &self,
        params: &AddUnitsParams,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::BloodInventory::find()
            .filter(entity::blood_inventory::Column::HospitalId.eq(params.hospital_id))
            .filter(entity::blood_inventory::Column::BloodType.eq(params.blood_type))
            .one(&txn)
            .await?;

        let record = match existing {
            Some(record) => {
                let expiry_date = std::cmp::max(record.expiry_date, params.expiry_date);

                entity::prelude::BloodInventory::update_many()
                    .col_expr(
                        entity::blood_inventory::Column::Quantity,
                        Expr::col(entity::blood_inventory::Column::Quantity).add(params.amount),
                    )
                    .col_expr(
                        entity::blood_inventory::Column::ExpiryDate,
                        Expr::value(expiry_date),
                    )
                    .col_expr(entity::blood_inventory::Column::LastUpdated, Expr::value(now))
                    .filter(entity::blood_inventory::Column::Id.eq(record.id))
                    .exec(&txn)
                    .await?;

                entity::prelude::BloodInventory::find_by_id(record.id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "Inventory record {} not found after update",
                            record.id
                        ))
                    })?
            }
            None => {
                entity::blood_inventory::ActiveModel {
                    hospital_id: ActiveValue::Set(params.hospital_id),
                    blood_type: ActiveValue::Set(params.blood_type),
                    quantity: ActiveValue::Set(params.amount),
                    expiry_date: ActiveValue::Set(params.expiry_date),
                    last_updated: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(InventoryRecord::from_entity(record))
    }

    /// Removes stock only if enough is on hand.
    ///
    /// Issued as `UPDATE ... SET quantity = quantity - amount WHERE quantity >= amount`,
    /// so two concurrent removals can never jointly drive the quantity negative.
    pub async fn remove_units(
        &self,
        hospital_id: i32,
        blood_type: BloodType,
        amount: i32,
        now: DateTime<Utc>,
    ) -> Result<RemoveUnitsOutcome, DbErr> {
        let result = entity::prelude::BloodInventory::update_many()
            .col_expr(
                entity::blood_inventory::Column::Quantity,
                Expr::col(entity::blood_inventory::Column::Quantity).sub(amount),
            )
            .col_expr(entity::blood_inventory::Column::LastUpdated, Expr::value(now))
            .filter(entity::blood_inventory::Column::HospitalId.eq(hospital_id))
            .filter(entity::blood_inventory::Column::BloodType.eq(blood_type))
            .filter(entity::blood_inventory::Column::Quantity.gte(amount))
            .exec(self.db)
            .await?;

        let current = self.find(hospital_id, blood_type).await?;

        Ok(match (result.rows_affected, current) {
            (0, Some(record)) => RemoveUnitsOutcome::Insufficient {
                available: record.quantity,
            },
            (_, Some(record)) => RemoveUnitsOutcome::Removed(record),
            (_, None) => RemoveUnitsOutcome::NotFound,
        })
    }

    /// Deletes the hospital's records whose expiry date is strictly before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    pub async fn delete_expired(&self, hospital_id: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::BloodInventory::delete_many()
            .filter(entity::blood_inventory::Column::HospitalId.eq(hospital_id))
            .filter(entity::blood_inventory::Column::ExpiryDate.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ids of hospitals holding at least one expired record.
    pub async fn hospitals_with_expired(&self, now: DateTime<Utc>) -> Result<Vec<i32>, DbErr> {
        entity::prelude::BloodInventory::find()
            .select_only()
            .column(entity::blood_inventory::Column::HospitalId)
            .filter(entity::blood_inventory::Column::ExpiryDate.lt(now))
            .group_by(entity::blood_inventory::Column::HospitalId)
            .order_by_asc(entity::blood_inventory::Column::HospitalId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
