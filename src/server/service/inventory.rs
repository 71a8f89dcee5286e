//! Inventory ledger: the only writer of hospital stock.
//!
//! Every mutation is a single conditional write against the (hospital, blood type)
//! key. A mutation that leaves stock above zero but under the low-stock threshold
//! sends one alert to the hospital's first admin; alerts never affect the outcome
//! of the mutation.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{hospital::HospitalRepository, inventory::InventoryRepository},
    error::{inventory::InventoryError, AppError},
    model::{
        hospital::Hospital,
        inventory::{
            AddUnitsParams, InventoryRecord, RemoveUnitsOutcome, RemoveUnitsParams,
            SetQuantityParams,
        },
    },
    service::notification::{NotificationGateway, Notifier},
};

/// Default low-stock threshold in millilitres.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 2000;

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
    notifier: Notifier<'a>,
    low_stock_threshold: i32,
}

impl<'a> InventoryService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn NotificationGateway,
        low_stock_threshold: i32,
    ) -> Self {
        Self {
            db,
            notifier: Notifier::new(gateway),
            low_stock_threshold,
        }
    }

    /// Sets the stock of a blood type, creating the record if needed.
    ///
    /// Calling twice with the same arguments leaves the same stored record.
    ///
    /// # Returns
    /// - `Ok(InventoryRecord)` - The record after the write
    /// - `Err(AppError::InventoryErr(InvalidQuantity))` - Negative quantity
    /// - `Err(AppError::InventoryErr(ExpiryInPast))` - Expiry date before `now`
    /// - `Err(AppError::NotFound)` - Hospital does not exist
    pub async fn set_quantity(
        &self,
        params: SetQuantityParams,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, AppError> {
        if params.quantity < 0 {
            return Err(InventoryError::InvalidQuantity(params.quantity).into());
        }
        if params.expiry_date < now {
            return Err(InventoryError::ExpiryInPast.into());
        }

        let hospital = self.find_hospital(params.hospital_id).await?;

        let record = InventoryRepository::new(self.db)
            .upsert(&params, now)
            .await?;

        self.alert_if_low(&hospital, &record).await;

        Ok(record)
    }

    /// Adds units, keeping the later of the stored and incoming expiry dates.
    ///
    /// # Returns
    /// - `Ok(InventoryRecord)` - The record after the write
    /// - `Err(AppError::InventoryErr(InvalidQuantity))` - Amount is not positive
    /// - `Err(AppError::InventoryErr(ExpiryInPast))` - Expiry date before `now`
    /// - `Err(AppError::NotFound)` - Hospital does not exist
    pub async fn add_units(
        &self,
        params: AddUnitsParams,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, AppError> {
        if params.amount <= 0 {
            return Err(InventoryError::InvalidQuantity(params.amount).into());
        }
        if params.expiry_date < now {
            return Err(InventoryError::ExpiryInPast.into());
        }

        let hospital = self.find_hospital(params.hospital_id).await?;

        let record = InventoryRepository::new(self.db)
            .add_units(&params, now)
            .await?;

        self.alert_if_low(&hospital, &record).await;

        Ok(record)
    }

    /// Removes units only when enough stock is on hand.
    ///
    /// # Returns
    /// - `Ok(InventoryRecord)` - The record after the write
    /// - `Err(AppError::InventoryErr(InvalidQuantity))` - Amount is not positive
    /// - `Err(AppError::InventoryErr(InsufficientStock))` - Amount exceeds stock; nothing changed
    /// - `Err(AppError::InventoryErr(RecordNotFound))` - Blood type not stocked at the hospital
    /// - `Err(AppError::NotFound)` - Hospital does not exist
    pub async fn remove_units(
        &self,
        params: RemoveUnitsParams,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, AppError> {
        if params.amount <= 0 {
            return Err(InventoryError::InvalidQuantity(params.amount).into());
        }

        let hospital = self.find_hospital(params.hospital_id).await?;

        let outcome = InventoryRepository::new(self.db)
            .remove_units(params.hospital_id, params.blood_type, params.amount, now)
            .await?;

        match outcome {
            RemoveUnitsOutcome::Removed(record) => {
                self.alert_if_low(&hospital, &record).await;
                Ok(record)
            }
            RemoveUnitsOutcome::Insufficient { available } => {
                Err(InventoryError::InsufficientStock {
                    available,
                    requested: params.amount,
                }
                .into())
            }
            RemoveUnitsOutcome::NotFound => Err(InventoryError::RecordNotFound {
                hospital_id: params.hospital_id,
                blood_type: params.blood_type,
            }
            .into()),
        }
    }

    pub async fn get_inventory(&self, hospital_id: i32) -> Result<Vec<InventoryRecord>, AppError> {
        self.find_hospital(hospital_id).await?;

        Ok(InventoryRepository::new(self.db)
            .get_by_hospital(hospital_id)
            .await?)
    }

    /// Records expiring between `now` and `now + within_days`, soonest first.
    pub async fn get_expiring(
        &self,
        hospital_id: i32,
        within_days: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<InventoryRecord>, AppError> {
        if within_days < 0 {
            return Err(AppError::BadRequest(format!(
                "Expiry window must not be negative, got {} days",
                within_days
            )));
        }

        let Some(until) = Duration::try_days(within_days).and_then(|d| now.checked_add_signed(d))
        else {
            return Err(AppError::BadRequest(format!(
                "Expiry window of {} days is out of range",
                within_days
            )));
        };

        self.find_hospital(hospital_id).await?;

        Ok(InventoryRepository::new(self.db)
            .get_expiring(hospital_id, now, until)
            .await?)
    }

    /// Removes the hospital's records that expired before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed; zero on a repeated sweep
    /// - `Err(AppError::NotFound)` - Hospital does not exist
    pub async fn expire_stock(&self, hospital_id: i32, now: DateTime<Utc>) -> Result<u64, AppError> {
        self.find_hospital(hospital_id).await?;

        let removed = InventoryRepository::new(self.db)
            .delete_expired(hospital_id, now)
            .await?;

        if removed > 0 {
            tracing::info!(
                "Removed {} expired inventory record(s) at hospital {}",
                removed,
                hospital_id
            );
        } else {
            tracing::debug!("No expired inventory at hospital {}", hospital_id);
        }

        Ok(removed)
    }

    /// Sweeps expired stock at every hospital and alerts each affected hospital once.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of records removed
    pub async fn expire_all(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let inventory_repo = InventoryRepository::new(self.db);
        let hospital_repo = HospitalRepository::new(self.db);

        let mut total = 0;

        for hospital_id in inventory_repo.hospitals_with_expired(now).await? {
            let removed = inventory_repo.delete_expired(hospital_id, now).await?;
            if removed == 0 {
                continue;
            }
            total += removed;

            let Some(hospital) = hospital_repo.find_by_id(hospital_id).await? else {
                continue;
            };

            match hospital.first_admin() {
                Some(admin_id) => {
                    self.notifier
                        .send(
                            admin_id,
                            format!(
                                "Expired stock removed: {} inventory record(s) at {} passed their expiry date.",
                                removed, hospital.name
                            ),
                            NotificationKind::Alert,
                        )
                        .await;
                }
                None => tracing::warn!(
                    "Hospital {} has no admins to notify about expired stock",
                    hospital.id
                ),
            }
        }

        if total > 0 {
            tracing::info!("Expiry sweep removed {} inventory record(s)", total);
        } else {
            tracing::debug!("Expiry sweep found nothing to remove");
        }

        Ok(total)
    }

    async fn find_hospital(&self, hospital_id: i32) -> Result<Hospital, AppError> {
        HospitalRepository::new(self.db)
            .find_by_id(hospital_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hospital {} not found", hospital_id)))
    }

    async fn alert_if_low(&self, hospital: &Hospital, record: &InventoryRecord) {
        if record.quantity <= 0 || record.quantity >= self.low_stock_threshold {
            return;
        }

        let Some(admin_id) = hospital.first_admin() else {
            tracing::warn!(
                "Hospital {} has no admins to send low stock alert for {}",
                hospital.id,
                record.blood_type.to_value()
            );
            return;
        };

        self.notifier
            .send(
                admin_id,
                format!(
                    "Low stock alert: Blood type {} at {} is now at {}ml.",
                    record.blood_type.to_value(),
                    hospital.name,
                    record.quantity
                ),
                NotificationKind::Alert,
            )
            .await;
    }
}
