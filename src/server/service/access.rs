//! Capability checks over the closed [`Role`] set.
//!
//! Every authorization decision in the application goes through one of these
//! functions instead of comparing role labels at call sites.

use entity::sea_orm_active_enums::Role;

use crate::server::model::{hospital::Hospital, request::BloodRequest, user::User};

/// Access rules, including the ones that depend on configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy {
    /// Lets a request's own recipient trigger matching. Off unless configured.
    pub allow_recipient_matching: bool,
}

impl AccessPolicy {
    pub fn new(allow_recipient_matching: bool) -> Self {
        Self {
            allow_recipient_matching,
        }
    }

    /// Whether `actor` may run donor matching for `request`.
    ///
    /// System admins and admins of the request's hospital always may. The
    /// recipient only may when `allow_recipient_matching` is set.
    pub fn can_match(&self, actor: &User, request: &BloodRequest, hospital: &Hospital) -> bool {
        if Self::is_hospital_staff(actor, hospital) {
            return true;
        }

        self.allow_recipient_matching && actor.id == request.recipient_id
    }

    /// Whether `actor` may read `request` and its matched donors.
    ///
    /// Hospital staff, the recipient and donors currently matched to it may.
    pub fn can_view_request(actor: &User, request: &BloodRequest, hospital: &Hospital) -> bool {
        Self::is_hospital_staff(actor, hospital)
            || actor.id == request.recipient_id
            || request.matched_donor_ids.contains(&actor.id)
    }

    /// Whether `actor` may fulfil or cancel `request`.
    pub fn can_update_status(actor: &User, request: &BloodRequest, hospital: &Hospital) -> bool {
        Self::is_hospital_staff(actor, hospital) || actor.id == request.recipient_id
    }

    pub fn can_manage_inventory(actor: &User, hospital: &Hospital) -> bool {
        Self::is_hospital_staff(actor, hospital)
    }

    /// Donors only give blood; every other role may open a request.
    pub fn can_create_request(actor: &User) -> bool {
        matches!(
            actor.role,
            Role::Recipient | Role::HospitalAdmin | Role::SystemAdmin
        )
    }

    fn is_hospital_staff(actor: &User, hospital: &Hospital) -> bool {
        actor.role == Role::SystemAdmin || hospital.is_admin(actor.id)
    }
}
