//! Scheduled polling task
use log::{debug, error, info};

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    thread::{Builder, JoinHandle},
};

use crate::{
    error::Error,
    provider::LocationProvider,
    solutions::TripSolution,
    trip::Trip,
};

/// [Poller] owns the single scheduled task driving a [Trip].
/// One atomic flag guards the whole lifecycle: a second `start` while
/// running fails, and `stop` joins the worker before returning.
/// The latest [TripSolution] is readable from any thread.
pub struct Poller<P: LocationProvider + Send + 'static> {
    /// Shared [Trip] pipeline.
    trip: Arc<Mutex<Trip<P>>>,
    /// Latest published [TripSolution].
    latest: Arc<Mutex<Option<TripSolution>>>,
    /// Single "trip started" flag.
    running: Arc<AtomicBool>,
    /// Polling period.
    interval: std::time::Duration,
    /// Worker handle, held while running.
    handle: Option<JoinHandle<()>>,
}

impl<P: LocationProvider + Send + 'static> Poller<P> {
    /// Builds a new (idle) [Poller] around this [Trip].
    /// The polling period comes from the trip [SamplingOpts](crate::prelude::SamplingOpts).
    pub fn new(trip: Trip<P>) -> Self {
        let interval_s = trip.config().sampling.poll_interval.to_seconds();
        Self {
            trip: Arc::new(Mutex::new(trip)),
            latest: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
            interval: std::time::Duration::from_secs_f64(interval_s.max(0.0)),
            handle: None,
        }
    }

    /// Whether the worker is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Latest published [TripSolution], if any tick succeeded yet.
    pub fn latest(&self) -> Option<TripSolution> {
        self.latest.lock().ok().and_then(|slot| *slot)
    }

    /// Shared handle over the [Trip] pipeline, to inspect or restart it
    /// while the worker runs.
    pub fn trip(&self) -> Arc<Mutex<Trip<P>>> {
        self.trip.clone()
    }

    /// Starts the worker. Exactly one may run per [Poller]:
    /// fails with [Error::PollerAlreadyRunning] otherwise.
    pub fn start(&mut self) -> Result<(), Error> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::PollerAlreadyRunning);
        }

        let trip = self.trip.clone();
        let latest = self.latest.clone();
        let running = self.running.clone();
        let interval = self.interval;

        let spawned = Builder::new().name("trip-poller".to_string()).spawn(move || {
            info!("poller started");

            while running.load(Ordering::SeqCst) {
                match trip.lock() {
                    Ok(mut trip) => {
                        if let Some(solution) = trip.poll() {
                            debug!(
                                "tick: d={:.6} km countdown={}",
                                solution.distance_km, solution.countdown
                            );
                            if let Ok(mut slot) = latest.lock() {
                                *slot = Some(solution);
                            }
                        }
                    },
                    Err(_) => {
                        error!("trip state poisoned: poller aborting");
                        running.store(false, Ordering::SeqCst);
                        break;
                    },
                }

                std::thread::sleep(interval);
            }

            info!("poller stopped");
        });

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            },
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                error!("failed to spawn poller worker: {}", e);
                Err(Error::PollerSpawn)
            },
        }
    }

    /// Stops the worker and waits for its current tick to complete.
    /// Fails with [Error::PollerNotRunning] when idle.
    pub fn stop(&mut self) -> Result<(), Error> {
        if self
            .running
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::PollerNotRunning);
        }

        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| Error::PollerPanicked)?;
        }

        Ok(())
    }
}

impl<P: LocationProvider + Send + 'static> Drop for Poller<P> {
    fn drop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }
}
