use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hospital")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hospital_admin::Entity")]
    HospitalAdmin,
    #[sea_orm(has_many = "super::blood_request::Entity")]
    BloodRequest,
    #[sea_orm(has_many = "super::blood_inventory::Entity")]
    BloodInventory,
}

impl Related<super::hospital_admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HospitalAdmin.def()
    }
}

impl Related<super::blood_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodRequest.def()
    }
}

impl Related<super::blood_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodInventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
