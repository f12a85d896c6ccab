//! # Spotmap
//!
//! A city-landmark map core with a synthetic live-occupancy model.
//!
//! The library owns the original logic of an interactive landmark map:
//! a validated place catalog, a per-place hourly baseline visitor profile,
//! a periodically regenerated live snapshot, and the busyness classifier
//! that tints every visual surface. Map rendering and account persistence
//! are reached through the [`view::MapView`] and [`store::UserStore`]
//! trait seams; this crate never draws or talks to a backend itself.

pub mod catalog;
pub mod core;
pub mod format;
pub mod occupancy;
pub mod prelude;
pub mod store;
pub mod view;

// Re-export public API
pub use crate::core::geo::LatLng;

pub use catalog::{Catalog, Place, PlaceFilter};

pub use occupancy::{
    baseline::BaselineProfile,
    busyness::{classify, BusynessLevel},
    config::{BusynessThresholds, JitterRange, OccupancyConfig},
    snapshot::LiveSnapshot,
};

#[cfg(feature = "live")]
pub use occupancy::simulator::{Simulator, SimulatorHandle};

pub use view::{controller::MapController, map::MapView};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, SpotError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum SpotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unknown place: {0}")]
    UnknownPlace(String),

    #[error("View error: {0}")]
    View(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = SpotError;
