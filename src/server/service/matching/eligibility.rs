use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::BloodType;

use crate::server::model::user::Donor;

/// Whether `donor` may be matched to a request for `blood_type` at `now`.
///
/// Requires an exact blood type match, the eligibility flag, and at least
/// `min_interval` elapsed since the last donation. Donors who never donated pass
/// the recency check.
pub fn is_eligible(
    donor: &Donor,
    blood_type: BloodType,
    min_interval: Duration,
    now: DateTime<Utc>,
) -> bool {
    if donor.blood_type != blood_type || !donor.eligible {
        return false;
    }

    match donor.last_donation_date {
        Some(last) => now - last >= min_interval,
        None => true,
    }
}
