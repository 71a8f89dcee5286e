use chrono::Duration;
use entity::sea_orm_active_enums::Urgency;

/// Days a donor must wait between donations.
pub const STANDARD_INTERVAL_DAYS: i64 = 56;
/// Relaxed waiting period applied to critical requests.
pub const CRITICAL_INTERVAL_DAYS: i64 = 28;
pub const STANDARD_RADIUS_KM: f64 = 50.0;
pub const CRITICAL_RADIUS_KM: f64 = 100.0;
/// Upper bound on the matched-donor list of a request.
pub const MAX_MATCHED_DONORS: usize = 5;

/// Search radius and recency window derived from a request's urgency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    pub min_interval: Duration,
    pub radius_km: f64,
    pub max_donors: usize,
}

impl MatchPolicy {
    pub fn for_urgency(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Critical => Self {
                min_interval: Duration::days(CRITICAL_INTERVAL_DAYS),
                radius_km: CRITICAL_RADIUS_KM,
                max_donors: MAX_MATCHED_DONORS,
            },
            Urgency::Low | Urgency::Medium | Urgency::High => Self {
                min_interval: Duration::days(STANDARD_INTERVAL_DAYS),
                radius_km: STANDARD_RADIUS_KM,
                max_donors: MAX_MATCHED_DONORS,
            },
        }
    }
}
