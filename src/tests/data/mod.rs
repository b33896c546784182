use std::collections::VecDeque;
use std::str::FromStr;

use hifitime::{Duration, Epoch};

use crate::{
    cfg::SamplingOpts,
    coordinates::Coordinates,
    fix::Fix,
    provider::{LocationProvider, ProviderError, ProviderKind},
};

/// Reference trip start.
pub fn t0() -> Epoch {
    Epoch::from_str("2020-06-25T00:00:00 UTC").unwrap()
}

/// [Fix] captured `offset_s` seconds into the reference trip.
pub fn fix_at(latitude_deg: f64, longitude_deg: f64, offset_s: f64) -> Fix {
    Fix::new(
        Coordinates::new(latitude_deg, longitude_deg),
        t0() + Duration::from_seconds(offset_s),
    )
}

/// Scripted platform provider. Each fix queue is drained one
/// coordinate per query; the last coordinate repeats forever.
#[derive(Debug, Default)]
pub struct TestProvider {
    pub permission_granted: bool,
    /// When set, permission requests fail.
    pub deny_permission: bool,
    pub network_enabled: bool,
    pub gps_enabled: bool,
    /// When set, network status queries fail.
    pub network_status_failure: bool,
    /// When set, network fix queries fail.
    pub network_fix_failure: bool,
    pub network_fixes: VecDeque<Coordinates>,
    pub gps_fixes: VecDeque<Coordinates>,
    pub permission_requests: u32,
    pub subscriptions: Vec<ProviderKind>,
}

impl TestProvider {
    /// Network provider scripted with these coordinates.
    pub fn network(fixes: &[Coordinates]) -> Self {
        Self {
            permission_granted: true,
            network_enabled: true,
            network_fixes: fixes.iter().copied().collect(),
            ..Default::default()
        }
    }

    /// GPS provider scripted with these coordinates.
    pub fn gps(fixes: &[Coordinates]) -> Self {
        Self {
            permission_granted: true,
            gps_enabled: true,
            gps_fixes: fixes.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn drain(queue: &mut VecDeque<Coordinates>) -> Option<Coordinates> {
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().copied()
        }
    }
}

impl LocationProvider for TestProvider {
    fn is_enabled(&self, kind: ProviderKind) -> Result<bool, ProviderError> {
        match kind {
            ProviderKind::Network => {
                if self.network_status_failure {
                    Err(ProviderError::Unavailable(kind))
                } else {
                    Ok(self.network_enabled)
                }
            },
            ProviderKind::Gps => Ok(self.gps_enabled),
        }
    }

    fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    fn request_permission(&mut self) -> Result<(), ProviderError> {
        self.permission_requests += 1;
        if self.deny_permission {
            Err(ProviderError::PermissionDenied)
        } else {
            self.permission_granted = true;
            Ok(())
        }
    }

    fn request_updates(
        &mut self,
        kind: ProviderKind,
        _opts: &SamplingOpts,
    ) -> Result<(), ProviderError> {
        self.subscriptions.push(kind);
        Ok(())
    }

    fn last_known(&mut self, kind: ProviderKind) -> Result<Option<Coordinates>, ProviderError> {
        match kind {
            ProviderKind::Network => {
                if self.network_fix_failure {
                    Err(ProviderError::Platform("network receiver lost".to_string()))
                } else {
                    Ok(Self::drain(&mut self.network_fixes))
                }
            },
            ProviderKind::Gps => Ok(Self::drain(&mut self.gps_fixes)),
        }
    }
}
