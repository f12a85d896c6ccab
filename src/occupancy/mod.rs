//! The synthetic live-occupancy model.
//!
//! Dependency order: the hourly weight curve (static constant) feeds the
//! per-place [`baseline::BaselineProfile`] (built once per catalog), which
//! feeds the periodic [`snapshot::LiveSnapshot`] generator, whose counts are
//! bucketed by the [`busyness`] classifier for every visual surface.

pub mod baseline;
pub mod busyness;
pub mod config;
pub mod curve;
pub mod snapshot;

#[cfg(feature = "live")]
pub mod simulator;

pub use baseline::BaselineProfile;
pub use busyness::{classify, classify_with, BusynessLevel};
pub use config::{BusynessThresholds, JitterRange, OccupancyConfig};
pub use snapshot::LiveSnapshot;
