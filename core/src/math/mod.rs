pub mod geodetic;
pub mod great_circle;

pub use geodetic::{ecef_to_wgs84, wgs84_to_ecef, Ecef, Geodetic};
pub use great_circle::{bearing, distance, distance_3d, waypoint, DistanceUnit, GeoPoint};
