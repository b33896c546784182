use hifitime::Duration;

/// [TripState] gathers the running totals of the ongoing trip.
/// It is created at trip start, updated on every accepted sample
/// and fully restored by a restart. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripState {
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
    /// Goes negative once the budget is blown.
    pub countdown: i64,

    /// Whether the most recent update accepted a coordinate change.
    pub location_changed: bool,

    /// Update ticks since the last accepted coordinate change.
    pub(crate) interval_ticks: u32,
}

impl TripState {
    /// Fresh [TripState], with the full time budget ahead.
    pub(crate) fn new(time_budget: i64) -> Self {
        Self {
            distance_km: 0.0,
            partial_speed_km_h: 0.0,
            total_speed_km_h: 0.0,
            fuel_liters: 0.0,
            recommended_speed_km_h: 0.0,
            elapsed: Duration::ZERO,
            countdown: time_budget,
            location_changed: false,
            interval_ticks: 1,
        }
    }

    /// Restores all accumulators, with the full time budget ahead.
    pub(crate) fn reset(&mut self, time_budget: i64) {
        *self = Self::new(time_budget);
    }

    /// Update ticks since the last accepted coordinate change.
    pub fn interval_ticks(&self) -> u32 {
        self.interval_ticks
    }
}
