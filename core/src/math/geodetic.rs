//! WGS-84 geodetic <-> earth-centred earth-fixed conversion.

use serde::{Deserialize, Serialize};

/// Semi-major axis in metres.
pub const WGS84_A: f64 = 6_378_137.0;
/// First eccentricity squared.
pub const WGS84_E2: f64 = 0.006_694_379_990_14;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Latitude/longitude in degrees, height above the ellipsoid in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

/// Prime vertical radius of curvature at latitude `phi` (radians).
fn prime_vertical_radius(phi: f64) -> f64 {
    WGS84_A / (1.0 - WGS84_E2 * phi.sin() * phi.sin()).sqrt()
}

pub fn wgs84_to_ecef(lat: f64, lon: f64, height: f64) -> Ecef {
    let phi = lat.to_radians();
    let lambda = lon.to_radians();
    let n = prime_vertical_radius(phi);
    Ecef {
        x: (n + height) * phi.cos() * lambda.cos(),
        y: (n + height) * phi.cos() * lambda.sin(),
        z: (n * (1.0 - WGS84_E2) + height) * phi.sin(),
    }
}

/// Iterative inverse of [`wgs84_to_ecef`]; converges to sub-millimetre in a
/// handful of rounds for points near the surface.
pub fn ecef_to_wgs84(point: Ecef) -> Geodetic {
    let p = point.x.hypot(point.y);
    let lambda = point.y.atan2(point.x);

    if p < 1e-9 {
        // on the polar axis
        let b = WGS84_A * (1.0 - WGS84_E2).sqrt();
        let lat = 90.0_f64.copysign(point.z);
        return Geodetic {
            lat,
            lon: 0.0,
            height: point.z.abs() - b,
        };
    }

    let mut phi = point.z.atan2(p * (1.0 - WGS84_E2));
    let mut height = 0.0;
    for _ in 0..10 {
        let n = prime_vertical_radius(phi);
        height = p / phi.cos() - n;
        let next = point.z.atan2(p * (1.0 - WGS84_E2 * n / (n + height)));
        let converged = (next - phi).abs() < 1e-12;
        phi = next;
        if converged {
            break;
        }
    }

    Geodetic {
        lat: phi.to_degrees(),
        lon: lambda.to_degrees(),
        height,
    }
}
