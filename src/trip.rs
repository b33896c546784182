//! Trip: sampler + solver pipeline
use log::info;

use crate::{
    cfg::Config,
    error::Error,
    fix::Fix,
    provider::LocationProvider,
    sampler::Sampler,
    solutions::TripSolution,
    solver::TripSolver,
    state::TripState,
};

/// [Trip] ties a [Sampler] to a [TripSolver]: one `poll` per tick
/// is the whole pipeline. Restarting re-arms everything.
pub struct Trip<P: LocationProvider> {
    /// Location [Sampler].
    sampler: Sampler<P>,
    /// [TripSolver].
    solver: TripSolver,
}

impl<P: LocationProvider> Trip<P> {
    /// Builds a new [Trip] from a validated [Config] and a platform
    /// [LocationProvider] implementation.
    pub fn new(cfg: Config, provider: P) -> Result<Self, Error> {
        let sampler = Sampler::new(provider, cfg.sampling.clone());
        let solver = TripSolver::new(cfg)?;
        Ok(Self { sampler, solver })
    }

    /// One tick: asks the platform for a fresh [Fix] and, when one is
    /// available, runs an estimation pass. Returns None when the platform
    /// had nothing to offer this tick.
    pub fn poll(&mut self) -> Option<TripSolution> {
        let fix = self.sampler.sample()?;
        let solution = self.solver.update(fix);

        if let Some(verdict) = solution.verdict {
            info!("{} - {}", fix.epoch, verdict);
        }

        Some(solution)
    }

    /// Push based platform notification: records the [Fix] into the
    /// history without running an estimation pass.
    pub fn notify(&mut self, fix: Fix) {
        self.solver.record(fix);
    }

    /// Restarts the trip: all accumulators restored, history discarded.
    pub fn restart(&mut self) {
        self.solver.reset();
        info!("trip restarted");
    }

    /// Trip parametrization.
    pub fn config(&self) -> &Config {
        self.solver.cfg()
    }

    /// Current [TripState] running totals.
    pub fn state(&self) -> &TripState {
        self.solver.state()
    }

    /// [Fix] history, ordered by capture time.
    pub fn history(&self) -> &[Fix] {
        self.solver.history()
    }
}
