//! Trip solutions
use hifitime::Duration;

/// Arrival punctuality, resolved once the destination threshold is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrivalVerdict {
    /// Arrival countdown within the tolerance band.
    OnTime,
    /// Arrival with unspent budget beyond the tolerance band.
    Early,
    /// Arrival countdown blown past the tolerance band.
    Late,
}

impl ArrivalVerdict {
    /// Classifies the arrival countdown, or None when it does not
    /// fall in any of the three bands.
    pub fn classify(countdown: i64, time_budget: i64, tolerance: i64) -> Option<Self> {
        if countdown.abs() <= tolerance {
            Some(Self::OnTime)
        } else if countdown < -tolerance {
            Some(Self::Late)
        } else if countdown <= time_budget {
            Some(Self::Early)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ArrivalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::OnTime => write!(f, "route completed on schedule"),
            Self::Early => write!(f, "route completed ahead of schedule"),
            Self::Late => write!(f, "route completed late"),
        }
    }
}

/// [TripSolution]: read only snapshot of the trip estimates,
/// emitted by each update pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSolution {
    /// Latitude of the sample that produced this solution, in decimal degrees.
    pub latitude_deg: f64,

    /// Longitude of the sample that produced this solution, in decimal degrees.
    pub longitude_deg: f64,

    /// Distance between the two most recent window samples, in kilometers.
    pub distance_km: f64,

    /// Average speed since the last accepted coordinate change, in km/h.
    pub partial_speed_km_h: f64,

    /// Average speed since trip start, in km/h.
    pub total_speed_km_h: f64,

    /// Total fuel burned, in liters.
    pub fuel_liters: f64,

    /// Speed to hold to complete the route within the time budget, in km/h.
    pub recommended_speed_km_h: f64,

    /// Time spent past the destination threshold.
    pub elapsed: Duration,

    /// Ticks remaining toward the trip time budget.
    pub countdown: i64,

    /// Whether this pass accepted a coordinate change.
    pub location_changed: bool,

    /// [ArrivalVerdict], present only past the destination threshold.
    pub verdict: Option<ArrivalVerdict>,
}
