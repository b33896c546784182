//! Trip progress solver
use itertools::Itertools;
use log::{debug, warn};

use hifitime::Duration;

use crate::{
    cfg::Config,
    constants::{METERS_PER_KM, M_S_TO_KM_H},
    coordinates::Coordinates,
    error::Error,
    fix::Fix,
    solutions::{ArrivalVerdict, TripSolution},
    state::TripState,
};

/// [TripSolver] consumes location [Fix]es and maintains the trip estimates.
/// It owns the fix history (ordered by capture time) and the [TripState]
/// running totals. The estimation window is always the two newest samples,
/// re-derived from the history tail.
pub struct TripSolver {
    /// Trip parametrization.
    cfg: Config,
    /// [Fix] history, ordered by capture [Epoch](hifitime::Epoch).
    history: Vec<Fix>,
    /// [TripState] running totals.
    state: TripState,
}

impl TripSolver {
    /// Builds a new [TripSolver] with given [Config].
    /// The configuration is validated once, here.
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        let state = TripState::new(cfg.route.time_budget);
        Ok(Self {
            cfg,
            state,
            history: Vec::with_capacity(64),
        })
    }

    /// Trip parametrization.
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    /// [TripState] running totals.
    pub fn state(&self) -> &TripState {
        &self.state
    }

    /// [Fix] history, ordered by capture time.
    pub fn history(&self) -> &[Fix] {
        &self.history
    }

    /// Records a [Fix] into the history without running an estimation
    /// pass. This is the entry point for push based platform
    /// notifications; insertion keeps the history ordered by capture time.
    pub fn record(&mut self, fix: Fix) {
        let index = self.history.partition_point(|f| f.epoch <= fix.epoch);
        self.history.insert(index, fix);
    }

    /// Runs one estimation pass for this [Fix].
    ///
    /// The very first fix only seeds the history. Afterwards, a fix
    /// carrying coordinates the history tail has not seen is an accepted
    /// coordinate change: it is appended and triggers the speed, fuel and
    /// recommendation updates. A fix repeating the tail coordinates only
    /// refreshes the window quantities (distance, trip clock, countdown).
    pub fn update(&mut self, fix: Fix) -> TripSolution {
        let coordinates = fix.coordinates;

        self.state.location_changed = false;

        let changed = match self.history.last() {
            Some(tail) => tail.coordinates != coordinates,
            None => {
                debug!("{} - initial fix", fix);
                self.record(fix);
                return self.solution(coordinates);
            },
        };

        if changed {
            debug!("{} - location changed", fix);
            self.state.location_changed = true;
            self.record(fix);
        }

        if let Some((_, &previous)) = self.history.iter().rev().next_tuple() {
            self.state.distance_km = previous.coordinates.distance_km(&coordinates);
            debug!("{} - window distance: {:.6} km", fix.epoch, self.state.distance_km);

            if self.cfg.route.destination_reached(&coordinates) {
                self.state.elapsed += fix.epoch - previous.epoch;
                self.state.countdown -= 1;

                debug!(
                    "{} - past destination threshold: elapsed={} countdown={}",
                    fix.epoch, self.state.elapsed, self.state.countdown
                );

                // trip clock barely started: seed the recommendation
                // from the full route over the full budget
                if self.state.elapsed <= Duration::from_seconds(1.0) {
                    self.state.recommended_speed_km_h = self.cfg.route.total_leg_km
                        * METERS_PER_KM
                        / self.cfg.route.time_budget as f64
                        * M_S_TO_KM_H;
                }
            }

            if self.state.location_changed {
                let route = &self.cfg.route;

                self.state.partial_speed_km_h = route.partial_leg_km * METERS_PER_KM
                    / self.state.interval_ticks as f64
                    * M_S_TO_KM_H;

                self.state.fuel_liters +=
                    self.cfg.fuel.rate_l_per_km(self.state.partial_speed_km_h)
                        * route.partial_leg_km;

                let elapsed_s = self.state.elapsed.to_seconds();

                if elapsed_s > 0.0 {
                    self.state.total_speed_km_h =
                        self.state.distance_km * METERS_PER_KM / elapsed_s * M_S_TO_KM_H;
                } else {
                    warn!("{} - null trip clock: total speed not updated", fix.epoch);
                }

                if self.state.countdown > 0 {
                    self.state.recommended_speed_km_h = (route.total_leg_km
                        - self.state.distance_km)
                        * METERS_PER_KM
                        / self.state.countdown as f64
                        * M_S_TO_KM_H;
                } else {
                    warn!(
                        "{} - expired time budget: recommended speed not updated",
                        fix.epoch
                    );
                }

                debug!(
                    "{} - partial={:.3} km/h total={:.3} km/h fuel={:.4} L",
                    fix.epoch,
                    self.state.partial_speed_km_h,
                    self.state.total_speed_km_h,
                    self.state.fuel_liters
                );

                self.state.interval_ticks = 1;
            }

            self.state.interval_ticks += 1;
        }

        self.solution(coordinates)
    }

    /// Restores the [TripState] and discards the history:
    /// the next fix starts a brand new trip.
    pub fn reset(&mut self) {
        self.state.reset(self.cfg.route.time_budget);
        self.history.clear();
    }

    /// Snapshots the current estimates for these [Coordinates].
    fn solution(&self, coordinates: Coordinates) -> TripSolution {
        let route = &self.cfg.route;

        let verdict = if route.destination_reached(&coordinates) {
            ArrivalVerdict::classify(
                self.state.countdown,
                route.time_budget,
                route.on_time_tolerance,
            )
        } else {
            None
        };

        TripSolution {
            latitude_deg: coordinates.latitude_deg,
            longitude_deg: coordinates.longitude_deg,
            distance_km: self.state.distance_km,
            partial_speed_km_h: self.state.partial_speed_km_h,
            total_speed_km_h: self.state.total_speed_km_h,
            fuel_liters: self.state.fuel_liters,
            recommended_speed_km_h: self.state.recommended_speed_km_h,
            elapsed: self.state.elapsed,
            countdown: self.state.countdown,
            location_changed: self.state.location_changed,
            verdict,
        }
    }
}
