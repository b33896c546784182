use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Invalid trip parametrization: the [Config] did not pass
    /// the validation step.
    #[error("invalid configuration: {0}")]
    Config(#[from] crate::cfg::Error),

    /// Only one poller may drive a trip at any point in time.
    #[error("poller is already running")]
    PollerAlreadyRunning,

    /// Attempt to stop a poller that was never started (or already stopped).
    #[error("poller is not running")]
    PollerNotRunning,

    /// The OS refused to spawn the polling thread.
    #[error("failed to spawn poller thread")]
    PollerSpawn,

    /// The polling thread died on a panic.
    #[error("poller worker panicked")]
    PollerPanicked,
}
