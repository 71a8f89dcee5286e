use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hospital::Hospital;

pub struct HospitalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HospitalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a hospital together with its admin list ordered by position.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hospital>, DbErr> {
        let Some(hospital) = entity::prelude::Hospital::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let admins = entity::prelude::HospitalAdmin::find()
            .filter(entity::hospital_admin::Column::HospitalId.eq(id))
            .order_by_asc(entity::hospital_admin::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(Hospital::from_entity(hospital, admins)))
    }

    /// Ids of every hospital the user administers.
    pub async fn hospital_ids_for_admin(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::HospitalAdmin::find()
            .filter(entity::hospital_admin::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.hospital_id).collect())
    }
}
