use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_hospital_table::Hospital;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodInventory::Id))
                    .col(integer(BloodInventory::HospitalId))
                    .col(string_len(BloodInventory::BloodType, 3))
                    .col(integer(BloodInventory::Quantity))
                    .col(timestamp_with_time_zone(BloodInventory::ExpiryDate))
                    .col(timestamp_with_time_zone(BloodInventory::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_inventory_hospital_id")
                            .from(BloodInventory::Table, BloodInventory::HospitalId)
                            .to(Hospital::Table, Hospital::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upserts target this index as their conflict key
        manager
            .create_index(
                Index::create()
                    .name("idx_blood_inventory_hospital_blood_type")
                    .table(BloodInventory::Table)
                    .col(BloodInventory::HospitalId)
                    .col(BloodInventory::BloodType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_blood_inventory_hospital_blood_type")
                    .table(BloodInventory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BloodInventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BloodInventory {
    Table,
    Id,
    HospitalId,
    BloodType,
    Quantity,
    ExpiryDate,
    LastUpdated,
}
