//! Spherical geometry for proximity search.
//!
//! All distances in the application are great-circle distances computed with the
//! haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. The bounding box
//! helper produces a latitude/longitude rectangle that fully contains a search
//! circle, so it can be used as a cheap SQL prefilter before the exact check.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Builds a point from optional stored coordinates.
    ///
    /// Returns `None` unless both coordinates are present and in range.
    pub fn from_optional(longitude: Option<f64>, latitude: Option<f64>) -> Option<Self> {
        match (longitude, latitude) {
            (Some(longitude), Some(latitude)) => {
                let point = Self::new(longitude, latitude);
                point.is_valid().then_some(point)
            }
            _ => None,
        }
    }

    /// Whether both coordinates are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self, other)
    }
}

/// Haversine great-circle distance between two points in kilometres.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    // rounding can push h marginally above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin()
}

/// Latitude/longitude rectangle enclosing a search circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    /// `None` when the box spans every longitude: it touches a pole or crosses the
    /// antimeridian. Callers then filter on latitude only.
    pub longitude: Option<(f64, f64)>,
}

/// Computes the smallest lat/lng rectangle containing every point within
/// `radius_km` of `center`.
pub fn bounding_box(center: &GeoPoint, radius_km: f64) -> BoundingBox {
    let angular = radius_km / EARTH_RADIUS_KM;
    let lat = center.latitude.to_radians();

    let min_lat = lat - angular;
    let max_lat = lat + angular;
    let half_pi = std::f64::consts::FRAC_PI_2;

    if min_lat <= -half_pi || max_lat >= half_pi {
        return BoundingBox {
            min_latitude: min_lat.max(-half_pi).to_degrees(),
            max_latitude: max_lat.min(half_pi).to_degrees(),
            longitude: None,
        };
    }

    let dlng = (angular.sin() / lat.cos()).asin().to_degrees();
    let min_lng = center.longitude - dlng;
    let max_lng = center.longitude + dlng;

    BoundingBox {
        min_latitude: min_lat.to_degrees(),
        max_latitude: max_lat.to_degrees(),
        longitude: (min_lng >= -180.0 && max_lng <= 180.0).then_some((min_lng, max_lng)),
    }
}
