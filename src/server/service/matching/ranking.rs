use std::cmp::Ordering;

use crate::server::{model::user::Donor, util::geo::GeoPoint};

/// Orders donors by great-circle distance from `origin`, closest first.
///
/// The sort is stable. Donors without a location go last and keep their input
/// order relative to each other.
pub fn rank(candidates: Vec<Donor>, origin: &GeoPoint) -> Vec<Donor> {
    let mut keyed: Vec<(Option<f64>, Donor)> = candidates
        .into_iter()
        .map(|donor| (donor.location.map(|l| origin.distance_km(&l)), donor))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, donor)| donor).collect()
}
