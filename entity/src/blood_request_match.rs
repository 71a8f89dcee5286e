use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_request_match")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub request_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub donor_id: i32,
    /// Zero-based position in the ranked match list (closest donor first).
    pub rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blood_request::Entity",
        from = "Column::RequestId",
        to = "super::blood_request::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BloodRequest,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DonorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Donor,
}

impl Related<super::blood_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
