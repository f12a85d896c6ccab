//! The universal hourly foot-traffic curve.

/// Relative foot-traffic intensity per hour of day (0-23).
///
/// One domain-wide constant shared by every place: near-empty small hours,
/// a morning ramp, a midday plateau, and an evening peak that decays after
/// 20:00. Each place's baseline profile scales this curve by its nominal
/// visitor count.
pub const HOURLY_WEIGHTS: [f64; 24] = [
    0.22, 0.18, 0.15, 0.14, 0.15, 0.20, // 00-05
    0.30, 0.45, 0.62, 0.78, 0.90, 0.98, // 06-11
    1.00, 0.97, 0.92, 0.88, 0.90, 0.95, // 12-17
    1.00, 0.96, 0.85, 0.68, 0.48, 0.32, // 18-23
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_covers_every_hour_with_positive_weights() {
        assert_eq!(HOURLY_WEIGHTS.len(), 24);
        assert!(HOURLY_WEIGHTS.iter().all(|w| *w > 0.0 && *w <= 1.0));
    }

    #[test]
    fn small_hours_are_quieter_than_midday() {
        assert!(HOURLY_WEIGHTS[3] < HOURLY_WEIGHTS[12]);
        assert!(HOURLY_WEIGHTS[23] < HOURLY_WEIGHTS[18]);
    }
}
