use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_hospital_table::Hospital,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(BloodRequest::Id))
                    .col(integer(BloodRequest::RecipientId))
                    .col(integer(BloodRequest::HospitalId))
                    .col(string_len(BloodRequest::BloodType, 3))
                    .col(integer(BloodRequest::Quantity))
                    .col(string_len(BloodRequest::Urgency, 16).default("medium"))
                    .col(string_len(BloodRequest::Status, 16).default("pending"))
                    .col(integer(BloodRequest::Version).default(0))
                    .col(
                        timestamp_with_time_zone(BloodRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(BloodRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_request_recipient_id")
                            .from(BloodRequest::Table, BloodRequest::RecipientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_request_hospital_id")
                            .from(BloodRequest::Table, BloodRequest::HospitalId)
                            .to(Hospital::Table, Hospital::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blood_request_hospital_status")
                    .table(BloodRequest::Table)
                    .col(BloodRequest::HospitalId)
                    .col(BloodRequest::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blood_request_recipient_id")
                    .table(BloodRequest::Table)
                    .col(BloodRequest::RecipientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BloodRequest {
    Table,
    Id,
    RecipientId,
    HospitalId,
    BloodType,
    Quantity,
    Urgency,
    Status,
    Version,
    CreatedAt,
    UpdatedAt,
}
