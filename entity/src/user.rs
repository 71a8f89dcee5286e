use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BloodType, Role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: Role,
    pub blood_type: BloodType,
    pub donation_eligibility: bool,
    pub last_donation_date: Option<DateTimeUtc>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hospital_admin::Entity")]
    HospitalAdmin,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::hospital_admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HospitalAdmin.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
