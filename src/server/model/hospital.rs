use crate::server::util::geo::GeoPoint;

/// Hospital with its ordered admin list.
#[derive(Debug, Clone, PartialEq)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
    /// Admin user ids ordered by position; the first entry receives hospital alerts.
    pub admin_ids: Vec<i32>,
}

impl Hospital {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The hospital entity
    /// - `admins` - Admin rows for the hospital in any order
    pub fn from_entity(
        entity: entity::hospital::Model,
        mut admins: Vec<entity::hospital_admin::Model>,
    ) -> Self {
        admins.sort_by_key(|a| (a.position, a.user_id));

        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            location: GeoPoint::new(entity.longitude, entity.latitude),
            admin_ids: admins.into_iter().map(|a| a.user_id).collect(),
        }
    }

    /// The admin that receives hospital-level notifications, if any.
    pub fn first_admin(&self) -> Option<i32> {
        self.admin_ids.first().copied()
    }

    pub fn is_admin(&self, user_id: i32) -> bool {
        self.admin_ids.contains(&user_id)
    }
}
