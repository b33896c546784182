#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod constants;
mod coordinates;
mod error;
mod fix;
mod poller;
mod provider;
mod sampler;
mod solutions;
mod solver;
mod state;
mod trip;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, FuelModel, RoutePlan, SamplingOpts};
    pub use crate::coordinates::Coordinates;
    pub use crate::error::Error;
    pub use crate::fix::Fix;
    pub use crate::poller::Poller;
    pub use crate::provider::{LocationProvider, ProviderError, ProviderKind};
    pub use crate::sampler::Sampler;
    pub use crate::solutions::{ArrivalVerdict, TripSolution};
    pub use crate::solver::TripSolver;
    pub use crate::state::TripState;
    pub use crate::trip::Trip;
    // re-export
    pub use hifitime::{Duration, Epoch};
}

// pub export
pub use error::Error;
