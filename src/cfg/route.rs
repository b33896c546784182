use crate::cfg::Error;
use crate::coordinates::Coordinates;

#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_destination_latitude() -> f64 {
    -20.4569
}

fn default_destination_longitude() -> f64 {
    -45.8358
}

fn default_total_leg_km() -> f64 {
    2.598461
}

fn default_partial_leg_km() -> f64 {
    0.5052034858527461
}

fn default_time_budget() -> i64 {
    100
}

fn default_on_time_tolerance() -> i64 {
    10
}

/// [RoutePlan] describes the planned journey: where it ends,
/// how long it is and how much time it may take.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct RoutePlan {
    /// Destination latitude, in decimal degrees.
    #[cfg_attr(feature = "serde", serde(default = "default_destination_latitude"))]
    pub destination_latitude_deg: f64,

    /// Destination longitude, in decimal degrees.
    #[cfg_attr(feature = "serde", serde(default = "default_destination_longitude"))]
    pub destination_longitude_deg: f64,

    /// Total route length, in kilometers.
    #[cfg_attr(feature = "serde", serde(default = "default_total_leg_km"))]
    pub total_leg_km: f64,

    /// Reference length of one route segment, in kilometers.
    /// Partial average speed and fuel burn are estimated over this leg.
    #[cfg_attr(feature = "serde", serde(default = "default_partial_leg_km"))]
    pub partial_leg_km: f64,

    /// Time budget to complete the route, in polling ticks.
    #[cfg_attr(feature = "serde", serde(default = "default_time_budget"))]
    pub time_budget: i64,

    /// Half width of the "on time" arrival band, in polling ticks.
    #[cfg_attr(feature = "serde", serde(default = "default_on_time_tolerance"))]
    pub on_time_tolerance: i64,
}

impl Default for RoutePlan {
    fn default() -> Self {
        Self {
            destination_latitude_deg: default_destination_latitude(),
            destination_longitude_deg: default_destination_longitude(),
            total_leg_km: default_total_leg_km(),
            partial_leg_km: default_partial_leg_km(),
            time_budget: default_time_budget(),
            on_time_tolerance: default_on_time_tolerance(),
        }
    }
}

impl RoutePlan {
    /// Whether these [Coordinates] lie past the destination threshold.
    /// The trip clock and the arrival countdown only run past this point.
    pub fn destination_reached(&self, coordinates: &Coordinates) -> bool {
        coordinates.latitude_deg < self.destination_latitude_deg
            && coordinates.longitude_deg > self.destination_longitude_deg
    }

    /// Returns an [Error] if this [RoutePlan] is not consistent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.time_budget <= 0 {
            return Err(Error::NullTimeBudget);
        }
        if self.total_leg_km <= 0.0 || self.partial_leg_km <= 0.0 {
            return Err(Error::NullRouteLeg);
        }
        Ok(())
    }
}
