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
                    .table(HospitalAdmin::Table)
                    .if_not_exists()
                    .col(integer(HospitalAdmin::HospitalId))
                    .col(integer(HospitalAdmin::UserId))
                    .col(integer(HospitalAdmin::Position).default(0))
                    .primary_key(
                        Index::create()
                            .col(HospitalAdmin::HospitalId)
                            .col(HospitalAdmin::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hospital_admin_hospital_id")
                            .from(HospitalAdmin::Table, HospitalAdmin::HospitalId)
                            .to(Hospital::Table, Hospital::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hospital_admin_user_id")
                            .from(HospitalAdmin::Table, HospitalAdmin::UserId)
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
            .drop_table(Table::drop().table(HospitalAdmin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HospitalAdmin {
    Table,
    HospitalId,
    UserId,
    Position,
}
