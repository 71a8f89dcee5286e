//! User domain models.
//!
//! `User` is the authenticated actor as seen by access control. `Donor` is the
//! subset of user data the matching engine reasons about.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BloodType, Role};

use crate::server::util::geo::GeoPoint;

/// Registered user acting on the system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub blood_type: BloodType,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            role: entity.role,
            blood_type: entity.blood_type,
        }
    }
}

/// Donation-relevant view of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    pub id: i32,
    pub blood_type: BloodType,
    /// Administrative eligibility flag (medical deferral clears it).
    pub eligible: bool,
    pub last_donation_date: Option<DateTime<Utc>>,
    /// `None` when the user has no stored or no valid coordinates.
    pub location: Option<GeoPoint>,
}

impl Donor {
    /// Converts an entity model to a donor at the repository boundary.
    ///
    /// Out-of-range stored coordinates are treated as missing.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            blood_type: entity.blood_type,
            eligible: entity.donation_eligibility,
            last_donation_date: entity.last_donation_date,
            location: GeoPoint::from_optional(entity.longitude, entity.latitude),
        }
    }
}
