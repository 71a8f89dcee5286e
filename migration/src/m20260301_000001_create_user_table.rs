use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FullName))
                    .col(string_uniq(User::Email))
                    .col(string_len(User::Role, 16))
                    .col(string_len(User::BloodType, 3))
                    .col(boolean(User::DonationEligibility).default(true))
                    .col(timestamp_with_time_zone_null(User::LastDonationDate))
                    .col(double_null(User::Longitude))
                    .col(double_null(User::Latitude))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Donor candidate lookups filter by blood type and coordinates together
        manager
            .create_index(
                Index::create()
                    .name("idx_user_blood_type_location")
                    .table(User::Table)
                    .col(User::BloodType)
                    .col(User::Latitude)
                    .col(User::Longitude)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FullName,
    Email,
    Role,
    BloodType,
    DonationEligibility,
    LastDonationDate,
    Longitude,
    Latitude,
    CreatedAt,
}
