use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000004_create_blood_request_table::BloodRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodRequestMatch::Table)
                    .if_not_exists()
                    .col(integer(BloodRequestMatch::RequestId))
                    .col(integer(BloodRequestMatch::DonorId))
                    .col(integer(BloodRequestMatch::Rank))
                    .primary_key(
                        Index::create()
                            .col(BloodRequestMatch::RequestId)
                            .col(BloodRequestMatch::DonorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_request_match_request_id")
                            .from(BloodRequestMatch::Table, BloodRequestMatch::RequestId)
                            .to(BloodRequest::Table, BloodRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_request_match_donor_id")
                            .from(BloodRequestMatch::Table, BloodRequestMatch::DonorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodRequestMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BloodRequestMatch {
    Table,
    RequestId,
    DonorId,
    Rank,
}
