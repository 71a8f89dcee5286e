use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BloodType, RequestStatus, Urgency};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recipient_id: i32,
    pub hospital_id: i32,
    pub blood_type: BloodType,
    /// Requested volume in millilitres.
    pub quantity: i32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    /// Optimistic concurrency token, incremented on every status or match write.
    pub version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecipientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recipient,
    #[sea_orm(
        belongs_to = "super::hospital::Entity",
        from = "Column::HospitalId",
        to = "super::hospital::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hospital,
    #[sea_orm(has_many = "super::blood_request_match::Entity")]
    BloodRequestMatch,
}

impl Related<super::hospital::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hospital.def()
    }
}

impl Related<super::blood_request_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodRequestMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
