//! Periodic live-snapshot simulation on tokio.
//!
//! One writer, many readers: each tick regenerates the snapshot and
//! publishes it through a watch channel, so readers always observe a fully
//! written mapping (the replace is a single value send, never a partial
//! update). The handle cancels the loop on shutdown so no dangling timer
//! outlives the view.

use super::{baseline::BaselineProfile, config::OccupancyConfig, snapshot::LiveSnapshot};
use crate::catalog::Catalog;
use chrono::Local;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::watch;

/// Spawns and owns the periodic snapshot task.
pub struct Simulator {
    catalog: Arc<Catalog>,
    profile: Arc<BaselineProfile>,
    config: OccupancyConfig,
}

impl Simulator {
    pub fn new(catalog: Arc<Catalog>, profile: Arc<BaselineProfile>, config: OccupancyConfig) -> Self {
        Self {
            catalog,
            profile,
            config,
        }
    }

    /// Starts the tick loop. Returns a cancellation handle and the channel
    /// the display layer reads snapshots from; the channel already holds an
    /// initial snapshot so readers never start empty.
    pub fn spawn(self) -> (SimulatorHandle, watch::Receiver<LiveSnapshot>) {
        let mut rng = StdRng::from_entropy();
        let initial = LiveSnapshot::generate(
            &self.profile,
            &self.catalog,
            Local::now(),
            &self.config,
            &mut rng,
        );
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.config.tick_period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first interval tick fires immediately; consume it so the
            // initial snapshot stands for a full period.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let snapshot = LiveSnapshot::generate(
                            &self.profile,
                            &self.catalog,
                            Local::now(),
                            &self.config,
                            &mut rng,
                        );
                        log::debug!(
                            "occupancy tick: {} places at {}",
                            snapshot.len(),
                            snapshot.taken_at().format("%H:%M:%S")
                        );
                        if snapshot_tx.send(snapshot).is_err() {
                            // No readers left
                            break;
                        }
                    }
                    _ = stop_rx.changed() => {
                        log::debug!("occupancy simulator stopped");
                        break;
                    }
                }
            }
        });

        (
            SimulatorHandle {
                stop_tx,
                task: Some(task),
            },
            snapshot_rx,
        )
    }
}

/// Cancellable handle to a running simulator.
///
/// Dropping the handle also stops the loop, so a torn-down view can never
/// leave a timer mutating shared state behind it.
pub struct SimulatorHandle {
    stop_tx: watch::Sender<bool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl SimulatorHandle {
    /// Stops the tick loop and waits for it to finish.
    pub async fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map(|t| t.is_finished()).unwrap_or(true)
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::jakarta;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn fast_config() -> OccupancyConfig {
        OccupancyConfig {
            tick_period: Duration::from_millis(10),
            ..OccupancyConfig::default()
        }
    }

    fn fixture() -> Simulator {
        let catalog = Arc::new(jakarta().clone());
        let config = fast_config();
        let profile = Arc::new(BaselineProfile::build(
            &catalog,
            &config,
            &mut ChaCha8Rng::seed_from_u64(11),
        ));
        Simulator::new(catalog, profile, config)
    }

    #[tokio::test]
    async fn publishes_fresh_snapshots_on_each_tick() {
        let (handle, mut rx) = fixture().spawn();

        let first = rx.borrow().clone();
        assert_eq!(first.len(), jakarta().len());

        rx.changed().await.unwrap();
        let second = rx.borrow().clone();
        assert_eq!(second.len(), jakarta().len());

        handle.stop().await;
    }

    #[tokio::test]
    async fn stop_cancels_the_tick_loop() {
        let (handle, mut rx) = fixture().spawn();
        rx.changed().await.unwrap();
        handle.stop().await;

        // Once stopped the sender side is gone; after draining any tick
        // that raced the stop, changed() must error instead of delivering.
        while rx.changed().await.is_ok() {}
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test]
    async fn dropping_the_handle_stops_publication() {
        let (handle, mut rx) = fixture().spawn();
        drop(handle);
        // The loop exits on the stop signal; the channel closes with it.
        while rx.changed().await.is_ok() {}
        assert!(rx.changed().await.is_err());
    }
}
