//! Physical constants

/// Mean Earth radius, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Meters per kilometer.
pub(crate) const METERS_PER_KM: f64 = 1000.0;

/// m/s to km/h conversion factor.
pub(crate) const M_S_TO_KM_H: f64 = 3.6;
