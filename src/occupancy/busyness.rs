//! Busyness classification: one count in, one of four ordered tiers out.
//!
//! The same classifier backs list badges, map-zone fill/outline, and the
//! hourly bar chart, so colors never disagree between views.

use super::config::BusynessThresholds;
use serde::{Deserialize, Serialize};

/// Ordered busyness tiers, each with a fixed display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BusynessLevel {
    Calm,
    Moderate,
    Busy,
    VeryBusy,
}

impl BusynessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Moderate => "Moderate",
            Self::Busy => "Busy",
            Self::VeryBusy => "Very Busy",
        }
    }

    /// Hex color token used uniformly across every visual surface.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Calm => "#22c55e",
            Self::Moderate => "#facc15",
            Self::Busy => "#f97316",
            Self::VeryBusy => "#dc2626",
        }
    }

    /// All tiers from calmest to busiest, for rendering a legend.
    pub fn all() -> [Self; 4] {
        [Self::Calm, Self::Moderate, Self::Busy, Self::VeryBusy]
    }
}

/// Classifies a visitor count with the default thresholds.
pub fn classify(count: u32) -> BusynessLevel {
    classify_with(count, &BusynessThresholds::default())
}

/// Classifies a visitor count. Inclusive lower bounds, evaluated highest
/// first; the first match wins.
pub fn classify_with(count: u32, thresholds: &BusynessThresholds) -> BusynessLevel {
    if count >= thresholds.very_busy {
        BusynessLevel::VeryBusy
    } else if count >= thresholds.busy {
        BusynessLevel::Busy
    } else if count >= thresholds.moderate {
        BusynessLevel::Moderate
    } else {
        BusynessLevel::Calm
    }
}
