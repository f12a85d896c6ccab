//! Per-place hourly baseline visitor profiles.

use super::{
    busyness::{classify_with, BusynessLevel},
    config::{BusynessThresholds, OccupancyConfig},
    curve::HOURLY_WEIGHTS,
};
use crate::{catalog::Catalog, format::hour_label, prelude::HashMap};
use rand::Rng;

/// Deterministic per-place stagger so adjacent catalog entries don't scale
/// identically: `0.92 + (i mod 5) * 0.02`.
const STAGGER_BASE: f64 = 0.92;
const STAGGER_STEP: f64 = 0.02;
const STAGGER_CYCLE: usize = 5;

/// Daytime footfall compresses around the curve's shape
const DAYTIME_LIFT: f64 = 1.05;
const OFFPEAK_DAMP: f64 = 0.95;

fn stagger(index: usize) -> f64 {
    STAGGER_BASE + (index % STAGGER_CYCLE) as f64 * STAGGER_STEP
}

fn daytime_lift(hour: usize) -> f64 {
    if (10..=20).contains(&hour) {
        DAYTIME_LIFT
    } else {
        OFFPEAK_DAMP
    }
}

/// One hour of a place's baseline, prepared for the popularity chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyPoint {
    pub hour: usize,
    pub label: String,
    pub count: u32,
    pub level: BusynessLevel,
}

/// Expected visitor count per place per hour of day.
///
/// Built exactly once per catalog and immutable for the lifetime of the
/// session; rebuilding it is a deliberate reset, not mutation. The random
/// source is injected so tests can pin the output.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineProfile {
    hours: HashMap<String, [u32; 24]>,
}

impl BaselineProfile {
    /// Builds the profile from the catalog and the hourly weight curve.
    ///
    /// Total over any validated catalog: the catalog has already rejected
    /// non-positive nominal counts, and every output value is clamped to
    /// `config.baseline_floor`.
    pub fn build<R: Rng + ?Sized>(catalog: &Catalog, config: &OccupancyConfig, rng: &mut R) -> Self {
        let mut hours = HashMap::default();
        for (index, place) in catalog.places().iter().enumerate() {
            let place_stagger = stagger(index);
            let mut profile = [0u32; 24];
            for (hour, slot) in profile.iter_mut().enumerate() {
                let raw = place.visitor_count as f64
                    * HOURLY_WEIGHTS[hour]
                    * place_stagger
                    * daytime_lift(hour)
                    * config.baseline_jitter.sample(rng);
                *slot = (raw.round() as u32).max(config.baseline_floor);
            }
            hours.insert(place.name.clone(), profile);
        }
        Self { hours }
    }

    /// The 24 hourly values for a place, if it is part of the profile.
    pub fn hourly(&self, name: &str) -> Option<&[u32; 24]> {
        self.hours.get(name)
    }

    /// Expected count for a place at an hour of day (wrapped to 0-23).
    pub fn expected_at(&self, name: &str, hour: usize) -> Option<u32> {
        self.hours.get(name).map(|values| values[hour % 24])
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Chart-ready series for a place: hour label, expected count, and the
    /// busyness tier each bar is tinted with.
    pub fn hourly_series(
        &self,
        name: &str,
        thresholds: &BusynessThresholds,
    ) -> Option<Vec<HourlyPoint>> {
        self.hours.get(name).map(|values| {
            values
                .iter()
                .enumerate()
                .map(|(hour, count)| HourlyPoint {
                    hour,
                    label: hour_label(hour as u32),
                    count: *count,
                    level: classify_with(*count, thresholds),
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::jakarta;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_place_gets_24_floored_values() {
        let config = OccupancyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let profile = BaselineProfile::build(jakarta(), &config, &mut rng);

        assert_eq!(profile.len(), jakarta().len());
        for place in jakarta().places() {
            let hours = profile.hourly(&place.name).unwrap();
            assert_eq!(hours.len(), 24);
            assert!(hours.iter().all(|v| *v >= config.baseline_floor));
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let config = OccupancyConfig::default();
        let a = BaselineProfile::build(jakarta(), &config, &mut ChaCha8Rng::seed_from_u64(9));
        let b = BaselineProfile::build(jakarta(), &config, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_free_build_matches_curve_arithmetic() {
        let config = OccupancyConfig::without_jitter();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let profile = BaselineProfile::build(jakarta(), &config, &mut rng);

        // First catalog entry: stagger(0) = 0.92
        let place = &jakarta().places()[0];
        let expected = |hour: usize| {
            let raw = place.visitor_count as f64
                * HOURLY_WEIGHTS[hour]
                * 0.92
                * if (10..=20).contains(&hour) { 1.05 } else { 0.95 };
            (raw.round() as u32).max(config.baseline_floor)
        };
        let hours = profile.hourly(&place.name).unwrap();
        assert_eq!(hours[3], expected(3));
        assert_eq!(hours[12], expected(12));
        assert_eq!(hours[21], expected(21));
    }

    #[test]
    fn stagger_cycles_every_five_places() {
        assert_eq!(stagger(0), 0.92);
        assert_eq!(stagger(4), 0.92 + 4.0 * 0.02);
        assert_eq!(stagger(5), 0.92);
    }

    #[test]
    fn hourly_series_is_chart_ready() {
        let config = OccupancyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let profile = BaselineProfile::build(jakarta(), &config, &mut rng);

        let series = profile
            .hourly_series("Monas (National Monument)", &config.thresholds)
            .unwrap();
        assert_eq!(series.len(), 24);
        assert_eq!(series[0].label, "12AM");
        assert_eq!(series[13].label, "1PM");
        for point in &series {
            assert_eq!(point.level, classify_with(point.count, &config.thresholds));
        }
        assert!(profile.hourly_series("missing", &config.thresholds).is_none());
    }
}
