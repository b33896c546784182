//! Platform location service boundary
use thiserror::Error;

use crate::cfg::SamplingOpts;
use crate::coordinates::Coordinates;

/// Kinds of location providers a platform may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Network based positioning (cell towers, WiFi).
    Network,
    /// Satellite (GNSS) positioning.
    Gps,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Gps => write!(f, "gps"),
        }
    }
}

/// Errors a platform location service may report.
/// None of them crosses the [Sampler] boundary: they are logged
/// and turn into "no fix this tick".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The user denied the location permission.
    #[error("location permission denied")]
    PermissionDenied,

    /// Requested provider does not exist or cannot answer right now.
    #[error("{0} provider unavailable")]
    Unavailable(ProviderKind),

    /// Any other platform failure, verbatim.
    #[error("platform failure: {0}")]
    Platform(String),
}

/// Any platform location service should implement the [LocationProvider]
/// trait to feed the [Sampler]. The library is fully synchronous: all
/// methods are invoked from the polling tick, never concurrently.
pub trait LocationProvider {
    /// Whether this [ProviderKind] is currently enabled on the platform.
    fn is_enabled(&self, kind: ProviderKind) -> Result<bool, ProviderError>;

    /// Whether the location permission has been granted already.
    fn permission_granted(&self) -> bool;

    /// Prompt the platform (possibly the user) for the location permission.
    fn request_permission(&mut self) -> Result<(), ProviderError>;

    /// Subscribe to continuous location updates from this [ProviderKind],
    /// with the given [SamplingOpts] (minimal displacement and update interval).
    fn request_updates(&mut self, kind: ProviderKind, opts: &SamplingOpts)
        -> Result<(), ProviderError>;

    /// Most recent [Coordinates] this [ProviderKind] knows of,
    /// or None if no fix was ever obtained.
    fn last_known(&mut self, kind: ProviderKind) -> Result<Option<Coordinates>, ProviderError>;
}
