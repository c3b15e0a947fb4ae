//! Spherical-earth distance, bearing and waypoint helpers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Nmi,
    Mi,
}

impl DistanceUnit {
    /// Mean earth radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Km => 6371.009,
            DistanceUnit::Nmi => 3440.069,
            DistanceUnit::Mi => 3958.761,
        }
    }

    /// Conversion from kilometres, the unit altitudes are carried in.
    /// The nautical figure is the one the range tables have always used.
    pub fn per_km(self) -> f64 {
        match self {
            DistanceUnit::Km => 1.0,
            DistanceUnit::Nmi => 0.539967,
            DistanceUnit::Mi => 0.621371,
        }
    }
}

/// Longitude/latitude in degrees with altitude in kilometres.
///
/// Only [`distance_3d`] looks at the altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub alt: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, alt: 0.0 }
    }

    pub fn with_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }
}

fn central_angle(from: GeoPoint, to: GeoPoint) -> f64 {
    let (phi1, phi2) = (from.lat.to_radians(), to.lat.to_radians());
    let delta_lambda = (to.lon - from.lon).to_radians();
    let cos_angle = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
    cos_angle.clamp(-1.0, 1.0).acos()
}

/// Great-circle distance by the spherical law of cosines.
pub fn distance(from: GeoPoint, to: GeoPoint, unit: DistanceUnit) -> f64 {
    central_angle(from, to) * unit.earth_radius()
}

/// Altitude-aware distance: the arc at the mean altitude of both points
/// combined with their altitude difference.
pub fn distance_3d(from: GeoPoint, to: GeoPoint, unit: DistanceUnit) -> f64 {
    let mean_alt = (from.alt + to.alt) / 2.0 * unit.per_km();
    let climb = (to.alt - from.alt) * unit.per_km();
    let arc = central_angle(from, to) * (unit.earth_radius() + mean_alt);
    arc.hypot(climb)
}

/// Initial bearing from `from` towards `to`, degrees in [0, 360).
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let (phi1, phi2) = (from.lat.to_radians(), to.lat.to_radians());
    let delta_lambda = (to.lon - from.lon).to_radians();
    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Point reached after travelling `dist` along `heading` degrees.
pub fn waypoint(from: GeoPoint, dist: f64, heading: f64, unit: DistanceUnit) -> GeoPoint {
    let angular = dist / unit.earth_radius();
    let theta = heading.to_radians();
    let phi1 = from.lat.to_radians();
    let lambda1 = from.lon.to_radians();

    let phi2 = (phi1.sin() * angular.cos() + phi1.cos() * angular.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * angular.sin() * phi1.cos()).atan2(angular.cos() - phi1.sin() * phi2.sin());

    GeoPoint::with_altitude(lambda2.to_degrees(), phi2.to_degrees(), from.alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn points() -> (GeoPoint, GeoPoint) {
        (
            GeoPoint::new(-147.123456, 65.654321),
            GeoPoint::new(-147.0, 65.0),
        )
    }

    #[test]
    fn distance_in_each_unit() {
        let (a, b) = points();
        let cases = [
            (DistanceUnit::Km, 72.982560054605955),
            (DistanceUnit::Nmi, 39.407422338359318),
            (DistanceUnit::Mi, 45.349255106111436),
        ];
        for (unit, expected) in cases {
            assert!((distance(a, b, unit) - expected).abs() < EPS, "{unit:?}");
            assert!((distance(b, a, unit) - expected).abs() < EPS, "{unit:?}");
        }
    }

    #[test]
    fn distance_3d_in_each_unit() {
        let (a, b) = points();
        let b = GeoPoint::with_altitude(b.lon, b.lat, 100.0);
        let cases = [
            (DistanceUnit::Km, 124.13857860874971),
            (DistanceUnit::Nmi, 67.03029049636208),
            (DistanceUnit::Mi, 77.13611793251013),
        ];
        for (unit, expected) in cases {
            assert!((distance_3d(a, b, unit) - expected).abs() < EPS, "{unit:?}");
            assert!((distance_3d(b, a, unit) - expected).abs() < EPS, "{unit:?}");
        }
    }

    #[test]
    fn distance_3d_at_ground_level_matches_surface_distance() {
        let (a, b) = points();
        let flat = distance(a, b, DistanceUnit::Mi);
        assert!((distance_3d(a, b, DistanceUnit::Mi) - flat).abs() < EPS);
    }

    #[test]
    fn bearing_both_ways() {
        let (a, b) = points();
        assert!((bearing(a, b) - 175.44049997975748).abs() < EPS);
        assert!((bearing(b, a) - 355.55268704404369).abs() < EPS);
    }

    #[test]
    fn identical_points_are_zero_apart() {
        let (a, _) = points();
        // acos is ill-conditioned near 1; allow for rounding in the cosine sum
        assert!(distance(a, a, DistanceUnit::Km) < 1e-3);
    }

    #[test]
    fn waypoint_in_kilometres() {
        let (a, b) = points();
        let c = waypoint(a, 123.456, 78.90, DistanceUnit::Km);
        assert!((distance(a, c, DistanceUnit::Km) - 123.456).abs() < EPS);
        assert!((distance(b, c, DistanceUnit::Km) - 150.3987625853371).abs() < EPS);
        assert!((bearing(a, c) - 78.9).abs() < EPS);
        assert!((bearing(b, c) - 50.193482484463864).abs() < EPS);
    }

    #[test]
    fn waypoint_in_statute_miles() {
        let (a, b) = points();
        let c = waypoint(a, 123.456, 78.90, DistanceUnit::Mi);
        assert!((distance(a, c, DistanceUnit::Km) - 198.68319585802084).abs() < EPS);
        assert!((distance(b, c, DistanceUnit::Km) - 219.32422216076554).abs() < EPS);
        assert!((bearing(b, c) - 59.713917534888068).abs() < EPS);
    }

    #[test]
    fn waypoint_in_nautical_miles() {
        let (a, b) = points();
        let c = waypoint(a, 123.456, 78.90, DistanceUnit::Nmi);
        assert!((distance(a, c, DistanceUnit::Km) - 228.640555).abs() < EPS);
        assert!((distance(b, c, DistanceUnit::Km) - 247.794534).abs() < EPS);
        assert!((bearing(b, c) - 62.005476897783133).abs() < EPS);
    }
}
