pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_hospital_table;
mod m20260301_000003_create_hospital_admin_table;
mod m20260301_000004_create_blood_request_table;
mod m20260301_000005_create_blood_request_match_table;
mod m20260301_000006_create_blood_inventory_table;
mod m20260301_000007_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_hospital_table::Migration),
            Box::new(m20260301_000003_create_hospital_admin_table::Migration),
            Box::new(m20260301_000004_create_blood_request_table::Migration),
            Box::new(m20260301_000005_create_blood_request_match_table::Migration),
            Box::new(m20260301_000006_create_blood_inventory_table::Migration),
            Box::new(m20260301_000007_create_notification_table::Migration),
        ]
    }
}
