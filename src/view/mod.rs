//! The map-side collaborator seam.
//!
//! The core never draws. It describes markers, zones, camera poses, and
//! styles, and hands them to whatever implements [`map::MapView`]; the
//! [`controller::MapController`] is the glue that keeps the view in step
//! with the catalog, the filter state, and each live snapshot.

pub mod controller;
pub mod map;
pub mod zone;

pub use controller::MapController;
pub use map::{CameraPose, MapView, MarkerSpec, ZoneStyle};
pub use zone::{zone_ring, ZoneRing, DEFAULT_ZONE_HALF_SIZE};
