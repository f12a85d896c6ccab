//! Tunable constants of the occupancy model.
//!
//! The thresholds and jitter ranges encode product intent rather than a
//! correctness requirement, so they live in a config struct instead of
//! hard-wired literals. The defaults are the values every display surface
//! was designed around.

use std::time::Duration;

/// A half-open multiplier range `[lo, hi)` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterRange {
    pub lo: f64,
    pub hi: f64,
}

impl JitterRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Draws a multiplier. A degenerate range (`hi <= lo`) always yields
    /// `lo`, which is how tests pin the model to a variance-free path.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.hi <= self.lo {
            self.lo
        } else {
            rng.gen_range(self.lo..self.hi)
        }
    }

    /// A range that always yields exactly `factor`.
    pub const fn fixed(factor: f64) -> Self {
        Self::new(factor, factor)
    }
}

/// Inclusive lower bounds for the three non-calm busyness tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusynessThresholds {
    pub moderate: u32,
    pub busy: u32,
    pub very_busy: u32,
}

impl Default for BusynessThresholds {
    fn default() -> Self {
        Self {
            moderate: 800,
            busy: 1200,
            very_busy: 1800,
        }
    }
}

/// Knobs of the occupancy model.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyConfig {
    /// Minimum displayed baseline value per hour
    pub baseline_floor: u32,
    /// Minimum displayed live-snapshot value
    pub snapshot_floor: u32,
    /// Per-hour randomization of the baseline profile
    pub baseline_jitter: JitterRange,
    /// Per-place randomization of each live snapshot
    pub snapshot_jitter: JitterRange,
    /// How often the live snapshot is regenerated
    pub tick_period: Duration,
    pub thresholds: BusynessThresholds,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            baseline_floor: 70,
            snapshot_floor: 50,
            baseline_jitter: JitterRange::new(0.90, 1.05),
            snapshot_jitter: JitterRange::new(0.90, 1.15),
            tick_period: Duration::from_secs(15),
            thresholds: BusynessThresholds::default(),
        }
    }
}

impl OccupancyConfig {
    /// Config with all randomness pinned to a factor of 1.0; counts then
    /// degenerate to the deterministic curve arithmetic.
    pub fn without_jitter() -> Self {
        Self {
            baseline_jitter: JitterRange::fixed(1.0),
            snapshot_jitter: JitterRange::fixed(1.0),
            ..Self::default()
        }
    }
}
