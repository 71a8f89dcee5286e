use entity::sea_orm_active_enums::{BloodType, Role};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::user::{Donor, User},
    util::geo::{bounding_box, GeoPoint},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds donors of a blood type located within `radius_km` of `center`.
    ///
    /// The query narrows candidates with a latitude/longitude bounding box in SQL,
    /// then keeps only those whose haversine distance to `center` is at most the
    /// radius. Only users with the donor role are considered, and users without
    /// coordinates are never returned. Eligibility (flag and donation recency) is
    /// not checked here.
    ///
    /// # Arguments
    /// - `center` - Search origin, normally the hospital location
    /// - `radius_km` - Search radius in kilometres
    /// - `blood_type` - Exact blood type to match
    ///
    /// # Returns
    /// - `Ok(Vec<Donor>)` - Candidates ordered by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_donor_candidates(
        &self,
        center: &GeoPoint,
        radius_km: f64,
        blood_type: BloodType,
    ) -> Result<Vec<Donor>, DbErr> {
        let bbox = bounding_box(center, radius_km);

        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Donor))
            .filter(entity::user::Column::BloodType.eq(blood_type))
            .filter(entity::user::Column::Latitude.between(bbox.min_latitude, bbox.max_latitude))
            .filter(entity::user::Column::Longitude.is_not_null());

        if let Some((min_lng, max_lng)) = bbox.longitude {
            query = query.filter(entity::user::Column::Longitude.between(min_lng, max_lng));
        }

        let users = query
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(Donor::from_entity)
            .filter(|donor| {
                donor
                    .location
                    .is_some_and(|location| center.distance_km(&location) <= radius_km)
            })
            .collect())
    }
}
