use hifitime::Duration;

#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_poll_interval() -> Duration {
    Duration::from_seconds(1.0)
}

fn default_min_displacement_m() -> f64 {
    10.0
}

fn default_min_update_interval() -> Duration {
    Duration::from_seconds(86_400.0)
}

/// Sampling options: polling cadence, and the update criteria
/// forwarded to the platform subscription.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct SamplingOpts {
    /// Polling period of the location service.
    #[cfg_attr(feature = "serde", serde(default = "default_poll_interval"))]
    pub poll_interval: Duration,

    /// Minimal displacement (in meters) for the platform
    /// to push a new location update.
    #[cfg_attr(feature = "serde", serde(default = "default_min_displacement_m"))]
    pub min_displacement_m: f64,

    /// Maximal quiet time between two platform updates.
    #[cfg_attr(feature = "serde", serde(default = "default_min_update_interval"))]
    pub min_update_interval: Duration,
}

impl Default for SamplingOpts {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
            min_displacement_m: default_min_displacement_m(),
            min_update_interval: default_min_update_interval(),
        }
    }
}
