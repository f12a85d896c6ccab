//! Place catalog: the fixed, ordered collection of landmarks a map session
//! is built from.
//!
//! The catalog is supplied by configuration (JSON or the builtin dataset),
//! validated once on load, and never mutated afterwards. Place names double
//! as stable identifiers; every other part of the crate keys on them.

mod jakarta;

pub use jakarta::jakarta;

use crate::{core::geo::LatLng, prelude::HashSet, Result, SpotError};
use serde::{Deserialize, Serialize};

/// Sentinel option meaning "do not filter by area"
pub const ALL_AREAS: &str = "All areas";

/// Sentinel option meaning "do not filter by category"
pub const ALL_CATEGORIES: &str = "All categories";

/// A single landmark. Read-only input data; the occupancy model consumes
/// it but never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique display name, used as the stable identifier everywhere
    pub name: String,
    pub position: LatLng,
    pub description: String,
    pub address: String,
    pub area: String,
    pub category: String,
    pub rating: f32,
    /// Nominal daily visitor count the occupancy model scales from
    pub visitor_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_query: Option<String>,
}

impl Place {
    /// Short popup text: name plus the first 90 characters of the description.
    pub fn popup_summary(&self) -> String {
        let teaser: String = self.description.chars().take(90).collect();
        if self.description.chars().count() > 90 {
            format!("{} — {}...", self.name, teaser)
        } else {
            format!("{} — {}", self.name, teaser)
        }
    }
}

/// Search and dropdown filter state for the place list.
///
/// `area`/`category` of `None` (or the sentinel strings) match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    pub query: String,
    pub area: Option<String>,
    pub category: Option<String>,
}

impl PlaceFilter {
    pub fn matches(&self, place: &Place) -> bool {
        let q = self.query.to_lowercase();
        let matches_search = q.is_empty()
            || place.name.to_lowercase().contains(&q)
            || place.description.to_lowercase().contains(&q)
            || place.area.to_lowercase().contains(&q);
        let matches_area = match self.area.as_deref() {
            None => true,
            Some(ALL_AREAS) => true,
            Some(area) => place.area == area,
        };
        let matches_category = match self.category.as_deref() {
            None => true,
            Some(ALL_CATEGORIES) => true,
            Some(category) => place.category == category,
        };
        matches_search && matches_area && matches_category
    }
}

/// An ordered, validated collection of places.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed input up front so the
    /// occupancy model stays total over whatever it is handed later.
    pub fn new(places: Vec<Place>) -> Result<Self> {
        let mut seen = HashSet::default();
        for place in &places {
            if place.name.trim().is_empty() {
                return Err(SpotError::Catalog("place with empty name".to_string()));
            }
            if !seen.insert(place.name.clone()) {
                return Err(SpotError::Catalog(format!(
                    "duplicate place name: {}",
                    place.name
                )));
            }
            if place.visitor_count == 0 {
                return Err(SpotError::Catalog(format!(
                    "{}: nominal visitor count must be positive",
                    place.name
                )));
            }
            if !place.position.is_valid() {
                return Err(SpotError::Catalog(format!(
                    "{}: invalid coordinates {:.4}, {:.4}",
                    place.name, place.position.lat, place.position.lng
                )));
            }
        }
        Ok(Self { places })
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Self::new(places)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.places)?)
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn get(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Unique area names in catalog order, preceded by the "all" sentinel.
    pub fn area_options(&self) -> Vec<String> {
        Self::options(ALL_AREAS, self.places.iter().map(|p| p.area.as_str()))
    }

    /// Unique category names in catalog order, preceded by the "all" sentinel.
    pub fn category_options(&self) -> Vec<String> {
        Self::options(ALL_CATEGORIES, self.places.iter().map(|p| p.category.as_str()))
    }

    fn options<'a>(sentinel: &str, values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::default();
        let mut out = vec![sentinel.to_string()];
        for value in values {
            if seen.insert(value) {
                out.push(value.to_string());
            }
        }
        out
    }

    /// Places matching the filter, in catalog order.
    pub fn filter(&self, filter: &PlaceFilter) -> Vec<&Place> {
        self.places.iter().filter(|p| filter.matches(p)).collect()
    }
}
