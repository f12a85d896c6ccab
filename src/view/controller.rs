//! Glue between the catalog, the occupancy model, the map view, and the
//! optional user store.

use super::{
    map::{CameraPose, MapView, MarkerSpec, ZoneStyle, MARKER_COLOR},
    zone::{zone_ring, DEFAULT_ZONE_HALF_SIZE},
};
use crate::{
    catalog::{Catalog, Place, PlaceFilter},
    occupancy::{
        busyness::classify_with,
        config::BusynessThresholds,
        snapshot::LiveSnapshot,
    },
    store::UserStore,
    Result, SpotError,
};
use std::sync::Arc;

/// Drives a `MapView` from catalog, filter, and snapshot state.
///
/// Occupancy behavior is identical whether or not a `UserStore` is
/// configured; the store only receives favorite/history events.
pub struct MapController<V: MapView> {
    catalog: Arc<Catalog>,
    view: V,
    thresholds: BusynessThresholds,
    store: Option<Arc<dyn UserStore>>,
    user: Option<String>,
    filter: PlaceFilter,
    selected: Option<String>,
    /// Non-fatal misconfiguration notice (e.g. missing map access token);
    /// surfaced to the UI instead of aborting.
    warning: Option<String>,
}

impl<V: MapView> MapController<V> {
    /// Sets up markers and zones for every place and selects the first one.
    ///
    /// Initial zone colors come from the nominal visitor counts; live
    /// colors take over with the first snapshot.
    pub fn new(catalog: Arc<Catalog>, mut view: V, thresholds: BusynessThresholds) -> Result<Self> {
        for place in catalog.places() {
            view.add_marker(&MarkerSpec {
                name: place.name.clone(),
                position: place.position,
                color: MARKER_COLOR.to_string(),
                popup: place.popup_summary(),
            })?;
            let level = classify_with(place.visitor_count, &thresholds);
            view.add_zone(
                &place.name,
                &zone_ring(place.position, DEFAULT_ZONE_HALF_SIZE),
                &ZoneStyle::for_level(level),
            )?;
        }

        let selected = catalog.places().first().map(|p| p.name.clone());
        if let Some(place) = catalog.places().first() {
            view.fly_to(&CameraPose::overview(place.position))?;
        }

        Ok(Self {
            catalog,
            view,
            thresholds,
            store: None,
            user: None,
            filter: PlaceFilter::default(),
            selected,
            warning: None,
        })
    }

    /// Attaches the optional account backend.
    pub fn with_store(mut self, store: Arc<dyn UserStore>, user: impl Into<String>) -> Self {
        self.store = Some(store);
        self.user = Some(user.into());
        self
    }

    /// Records a non-fatal misconfiguration (missing token and the like).
    pub fn set_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("map view degraded: {message}");
        self.warning = Some(message);
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected
            .as_deref()
            .and_then(|name| self.catalog.get(name))
    }

    pub fn filter(&self) -> &PlaceFilter {
        &self.filter
    }

    /// Places passing the current filter, in catalog order.
    pub fn filtered(&self) -> Vec<&Place> {
        self.catalog.filter(&self.filter)
    }

    /// Selects a place: flies the camera in and, when an account is
    /// configured, appends a visit-history entry.
    pub async fn select(&mut self, name: &str) -> Result<()> {
        let place = self
            .catalog
            .get(name)
            .ok_or_else(|| SpotError::UnknownPlace(name.to_string()))?;
        log::info!("selected {}", place.name);
        self.view.fly_to(&CameraPose::landmark(place.position))?;
        self.selected = Some(place.name.clone());

        if let (Some(store), Some(user)) = (&self.store, &self.user) {
            store.append_visit(user, name).await?;
        }
        Ok(())
    }

    /// Applies a new filter: toggles marker visibility, and when the
    /// current selection is filtered out, falls back to the first match.
    pub async fn apply_filter(&mut self, filter: PlaceFilter) -> Result<()> {
        self.filter = filter;
        let visible: Vec<String> = self
            .catalog
            .filter(&self.filter)
            .iter()
            .map(|p| p.name.clone())
            .collect();

        for place in self.catalog.places() {
            self.view
                .set_marker_visible(&place.name, visible.contains(&place.name))?;
        }

        let selection_visible = self
            .selected
            .as_ref()
            .map(|name| visible.contains(name))
            .unwrap_or(false);
        if !selection_visible {
            if let Some(first) = visible.first().cloned() {
                self.select(&first).await?;
            }
        }
        Ok(())
    }

    /// Recolors every zone from a live snapshot through the classifier.
    ///
    /// A place missing from the snapshot keeps a color derived from its
    /// nominal count, so partial data degrades instead of failing.
    pub fn apply_snapshot(&mut self, snapshot: &LiveSnapshot) -> Result<()> {
        for place in self.catalog.places() {
            let count = snapshot.count(&place.name).unwrap_or(place.visitor_count);
            let level = classify_with(count, &self.thresholds);
            self.view
                .set_zone_style(&place.name, &ZoneStyle::for_level(level))?;
        }
        Ok(())
    }

    /// Adds or removes the selected place from the user's favorites.
    /// No-op without a configured store.
    pub async fn toggle_favorite(&mut self, name: &str) -> Result<bool> {
        if self.catalog.get(name).is_none() {
            return Err(SpotError::UnknownPlace(name.to_string()));
        }
        let (Some(store), Some(user)) = (&self.store, &self.user) else {
            return Ok(false);
        };
        let favorites = store.favorites(user).await?;
        if favorites.iter().any(|f| f == name) {
            store.remove_favorite(user, name).await?;
            Ok(false)
        } else {
            store.add_favorite(user, name).await?;
            Ok(true)
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
