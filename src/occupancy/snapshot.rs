//! Live visitor-count snapshots.

use super::{baseline::BaselineProfile, config::OccupancyConfig};
use crate::{catalog::Catalog, prelude::HashMap};
use chrono::{DateTime, Local, Timelike};
use rand::Rng;
use std::f64::consts::TAU;

/// Smooth oscillation across each hour so snapshots drift continuously
/// instead of jumping only on the hour: `0.9 + 0.1 * sin(2π * minute/60)`.
pub(crate) fn minute_wave(minute: u32) -> f64 {
    0.9 + 0.1 * (TAU * f64::from(minute % 60) / 60.0).sin()
}

/// "Visitors right now" per place.
///
/// Regenerated wholesale on each tick; a new snapshot fully supersedes the
/// previous one, there is no partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSnapshot {
    counts: HashMap<String, u32>,
    taken_at: DateTime<Local>,
}

impl LiveSnapshot {
    /// Generates a fresh snapshot for the given wall-clock time.
    ///
    /// Total over empty or partial profiles: a place missing from the
    /// profile falls back to its nominal visitor count, and every value is
    /// clamped to `config.snapshot_floor`.
    pub fn generate<R: Rng + ?Sized>(
        profile: &BaselineProfile,
        catalog: &Catalog,
        now: DateTime<Local>,
        config: &OccupancyConfig,
        rng: &mut R,
    ) -> Self {
        let hour = now.hour() as usize;
        let wave = minute_wave(now.minute());

        let mut counts = HashMap::default();
        for place in catalog.places() {
            let baseline = profile
                .expected_at(&place.name, hour)
                .unwrap_or(place.visitor_count);
            let raw = f64::from(baseline) * config.snapshot_jitter.sample(rng) * wave;
            counts.insert(
                place.name.clone(),
                (raw.round() as u32).max(config.snapshot_floor),
            );
        }
        Self {
            counts,
            taken_at: now,
        }
    }

    /// An empty snapshot, the safe fallback before the first tick.
    pub fn empty(now: DateTime<Local>) -> Self {
        Self {
            counts: HashMap::default(),
            taken_at: now,
        }
    }

    pub fn count(&self, name: &str) -> Option<u32> {
        self.counts.get(name).copied()
    }

    pub fn taken_at(&self) -> DateTime<Local> {
        self.taken_at
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
