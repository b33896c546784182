//! Location sampler
use hifitime::Epoch;
use log::{debug, warn};

use crate::{
    cfg::SamplingOpts,
    coordinates::Coordinates,
    fix::Fix,
    provider::{LocationProvider, ProviderKind},
};

/// [Sampler] wraps a platform [LocationProvider] and turns it into
/// a stream of timestamped [Fix]es. Network positioning is preferred,
/// GPS is the fallback. Platform errors never escape: a failing tick
/// simply yields no fix.
pub struct Sampler<P: LocationProvider> {
    /// Platform [LocationProvider] implementation.
    provider: P,
    /// [SamplingOpts] forwarded on every subscription.
    opts: SamplingOpts,
}

impl<P: LocationProvider> Sampler<P> {
    /// Builds a new [Sampler] around this platform provider.
    pub fn new(provider: P, opts: SamplingOpts) -> Self {
        Self { provider, opts }
    }

    /// Returns the most recent [Fix] the platform knows of, stamped at
    /// reception, or None when no provider is enabled, no fix was ever
    /// obtained, or the platform failed this tick.
    pub fn sample(&mut self) -> Option<Fix> {
        if !self.provider.permission_granted() {
            if let Err(e) = self.provider.request_permission() {
                warn!("location permission not granted: {}", e);
                return None;
            }
        }

        let network = self.enabled(ProviderKind::Network);
        let gps = self.enabled(ProviderKind::Gps);

        if !network && !gps {
            debug!("no location provider enabled");
            return None;
        }

        let mut coordinates = None;

        if network {
            coordinates = self.last_known(ProviderKind::Network);
        }

        if coordinates.is_none() && gps {
            coordinates = self.last_known(ProviderKind::Gps);
        }

        let coordinates = coordinates?;

        match Epoch::now() {
            Ok(epoch) => Some(Fix::new(coordinates, epoch)),
            Err(e) => {
                warn!("system clock unavailable: {}", e);
                None
            },
        }
    }

    /// Enabled state of this [ProviderKind].
    /// A failing query counts as disabled.
    fn enabled(&self, kind: ProviderKind) -> bool {
        match self.provider.is_enabled(kind) {
            Ok(enabled) => enabled,
            Err(e) => {
                warn!("{} status query failed: {}", kind, e);
                false
            },
        }
    }

    /// Subscribes to this [ProviderKind] then grabs its latest known
    /// [Coordinates]. Any platform error turns into None.
    fn last_known(&mut self, kind: ProviderKind) -> Option<Coordinates> {
        if let Err(e) = self.provider.request_updates(kind, &self.opts) {
            warn!("{} subscription failed: {}", kind, e);
            return None;
        }

        match self.provider.last_known(kind) {
            Ok(Some(coordinates)) => {
                debug!("{} fix: {}", kind, coordinates);
                Some(coordinates)
            },
            Ok(None) => None,
            Err(e) => {
                warn!("{} query failed: {}", kind, e);
                None
            },
        }
    }
}
