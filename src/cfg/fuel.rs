use crate::cfg::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_cruise_threshold_km_h() -> f64 {
    80.0
}

fn default_highway_threshold_km_h() -> f64 {
    120.0
}

fn default_cruise_rate_l_km() -> f64 {
    0.047
}

fn default_highway_rate_l_km() -> f64 {
    0.0641
}

fn default_fast_rate_l_km() -> f64 {
    0.0962
}

/// Three tier fuel consumption model, keyed by average speed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct FuelModel {
    /// Upper bound of the most economical tier, in km/h.
    #[cfg_attr(feature = "serde", serde(default = "default_cruise_threshold_km_h"))]
    pub cruise_threshold_km_h: f64,

    /// Upper bound of the intermediate tier, in km/h.
    #[cfg_attr(feature = "serde", serde(default = "default_highway_threshold_km_h"))]
    pub highway_threshold_km_h: f64,

    /// Consumption at or below the cruise threshold, in L/km.
    #[cfg_attr(feature = "serde", serde(default = "default_cruise_rate_l_km"))]
    pub cruise_rate_l_km: f64,

    /// Consumption at or below the highway threshold, in L/km.
    #[cfg_attr(feature = "serde", serde(default = "default_highway_rate_l_km"))]
    pub highway_rate_l_km: f64,

    /// Consumption past the highway threshold, in L/km.
    #[cfg_attr(feature = "serde", serde(default = "default_fast_rate_l_km"))]
    pub fast_rate_l_km: f64,
}

impl Default for FuelModel {
    fn default() -> Self {
        Self {
            cruise_threshold_km_h: default_cruise_threshold_km_h(),
            highway_threshold_km_h: default_highway_threshold_km_h(),
            cruise_rate_l_km: default_cruise_rate_l_km(),
            highway_rate_l_km: default_highway_rate_l_km(),
            fast_rate_l_km: default_fast_rate_l_km(),
        }
    }
}

impl FuelModel {
    /// Consumption rate (in L/km) for given average speed (in km/h).
    pub fn rate_l_per_km(&self, speed_km_h: f64) -> f64 {
        if speed_km_h <= self.cruise_threshold_km_h {
            self.cruise_rate_l_km
        } else if speed_km_h <= self.highway_threshold_km_h {
            self.highway_rate_l_km
        } else {
            self.fast_rate_l_km
        }
    }

    /// Returns an [Error] if this [FuelModel] is not consistent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cruise_threshold_km_h >= self.highway_threshold_km_h {
            return Err(Error::InvertedFuelThresholds);
        }
        Ok(())
    }
}
