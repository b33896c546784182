//! Geodetic coordinates
use crate::constants::EARTH_RADIUS_KM;

/// Geodetic coordinates, in decimal degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude, in decimal degrees.
    pub latitude_deg: f64,
    /// Longitude, in decimal degrees.
    pub longitude_deg: f64,
}

impl Coordinates {
    /// Builds new [Coordinates] from latitude and longitude, both in decimal degrees.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Great-circle distance to `rhs` in kilometers (haversine formula,
    /// spherical Earth of [EARTH_RADIUS_KM]).
    pub fn distance_km(&self, rhs: &Self) -> f64 {
        let d_lat = (rhs.latitude_deg - self.latitude_deg).to_radians();
        let d_lon = (rhs.longitude_deg - self.longitude_deg).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude_deg.to_radians().cos()
                * rhs.latitude_deg.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "lat={:.6}°, lon={:.6}°",
            self.latitude_deg, self.longitude_deg
        )
    }
}
