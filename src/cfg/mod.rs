//! Trip parametrization
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

mod fuel;
mod route;
mod sampling;

pub use fuel::FuelModel;
pub use route::RoutePlan;
pub use sampling::SamplingOpts;

/// Configuration Error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("trip time budget must be strictly positive")]
    NullTimeBudget,
    #[error("route legs must be strictly positive")]
    NullRouteLeg,
    #[error("fuel speed thresholds must be increasing")]
    InvertedFuelThresholds,
}

/// [Config] gathers everything that parametrizes a trip.
/// Route specific quantities are never hardcoded: inject them here.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// [RoutePlan]: destination, route lengths, time budget.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route: RoutePlan,

    /// [FuelModel]: speed tiers and consumption rates.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fuel: FuelModel,

    /// [SamplingOpts]: polling cadence and platform update requests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sampling: SamplingOpts,
}

impl Config {
    /// Returns an [Error] if any section is not consistent.
    pub fn validate(&self) -> Result<(), Error> {
        self.route.validate()?;
        self.fuel.validate()
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
    }
}
