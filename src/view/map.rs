//! The `MapView` capability trait and the value types it is fed with.

use super::zone::ZoneRing;
use crate::{core::geo::LatLng, occupancy::busyness::BusynessLevel, Result};

/// Default marker pin color
pub const MARKER_COLOR: &str = "#007cbf";

/// A camera move the view should animate to.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPose {
    pub center: LatLng,
    pub zoom: f64,
    pub pitch: f64,
    /// `None` keeps the view's current bearing
    pub bearing: Option<f64>,
    pub speed: f64,
}

impl CameraPose {
    /// Close-up pose used when a landmark is selected.
    pub fn landmark(center: LatLng) -> Self {
        Self {
            center,
            zoom: 15.5,
            pitch: 60.0,
            bearing: None,
            speed: 0.7,
        }
    }

    /// City-wide pose used for the initial view.
    pub fn overview(center: LatLng) -> Self {
        Self {
            center,
            zoom: 11.5,
            pitch: 50.0,
            bearing: Some(-15.0),
            speed: 1.2,
        }
    }
}

/// Everything the view needs to place one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub name: String,
    pub position: LatLng,
    pub color: String,
    pub popup: String,
}

/// Fill and outline styling for a busy zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStyle {
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub line_color: &'static str,
    pub line_width: f64,
    pub line_opacity: f64,
}

impl ZoneStyle {
    /// The uniform zone styling for a busyness tier; fill and outline share
    /// the tier's color token so no surface can disagree with another.
    pub fn for_level(level: BusynessLevel) -> Self {
        Self {
            fill_color: level.color(),
            fill_opacity: 0.14,
            line_color: level.color(),
            line_width: 2.0,
            line_opacity: 0.7,
        }
    }
}

/// The rendering capability the core calls through.
///
/// Implementations own all per-place view handles (markers, zone layers)
/// in a single mapping keyed by place name; the core never duplicates that
/// state on its side.
pub trait MapView {
    /// Adds a marker with its popup content.
    fn add_marker(&mut self, spec: &MarkerSpec) -> Result<()>;

    /// Adds a busy-zone overlay for a place.
    fn add_zone(&mut self, name: &str, ring: &ZoneRing, style: &ZoneStyle) -> Result<()>;

    /// Restyles an existing zone (fill and outline together).
    fn set_zone_style(&mut self, name: &str, style: &ZoneStyle) -> Result<()>;

    /// Shows or hides a place's marker.
    fn set_marker_visible(&mut self, name: &str, visible: bool) -> Result<()>;

    /// Animates the camera to a pose.
    fn fly_to(&mut self, pose: &CameraPose) -> Result<()>;
}
