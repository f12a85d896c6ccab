//! Prelude module for common spotmap types and traits
//!
//! Re-exports the most commonly used types and functions for easy
//! importing with `use spotmap::prelude::*;`.

pub use crate::core::geo::LatLng;

pub use crate::catalog::{jakarta, Catalog, Place, PlaceFilter, ALL_AREAS, ALL_CATEGORIES};

pub use crate::occupancy::{
    baseline::BaselineProfile,
    busyness::{classify, classify_with, BusynessLevel},
    config::{BusynessThresholds, JitterRange, OccupancyConfig},
    curve::HOURLY_WEIGHTS,
    snapshot::LiveSnapshot,
};

#[cfg(feature = "live")]
pub use crate::occupancy::simulator::{Simulator, SimulatorHandle};

pub use crate::format::{count_label, hour_label};

pub use crate::view::{
    controller::MapController,
    map::{CameraPose, MapView, MarkerSpec, ZoneStyle},
    zone::{zone_ring, ZoneRing, DEFAULT_ZONE_HALF_SIZE},
};

pub use crate::store::{MemoryStore, UserStore, VisitRecord};

pub use crate::{Result, SpotError};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
