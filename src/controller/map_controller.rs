//! Map screen controller

use crate::controller::{ControllerError, ControllerResult, Notification, ViewState};
use crate::core::{Coordinate, SavedLocation, STUB_DESTINATION};
use crate::provider::location::ensure_permission;
use crate::provider::{FetchOptions, LocationProvider};
use crate::render::{MapScene, TapEvent};
use crate::storage::{history, KeyValueStore};
use chrono::{Local, Utc};
use log::{debug, error, info, warn};

/// Controller for the location-and-route screen
///
/// Owns the view state and both collaborators; the display layer reads
/// state through [`MapController::state`] and [`MapController::scene`]
/// after each operation. Operations run to completion one at a time, so
/// no locking is needed.
pub struct MapController {
    provider: Box<dyn LocationProvider>,
    store: Box<dyn KeyValueStore>,
    state: ViewState,
    fetch_options: FetchOptions,
}

impl MapController {
    pub fn new(provider: Box<dyn LocationProvider>, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            store,
            state: ViewState::new(),
            fetch_options: FetchOptions::default(),
        }
    }

    /// Current view state, read-only
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Snapshot of the drawable scene for the renderer
    pub fn scene(&self) -> MapScene {
        MapScene {
            center: self.state.position,
            markers: self.state.markers.clone(),
            segments: self.state.route.clone().into_iter().collect(),
        }
    }

    /// Screen activation: acquire a position fix, then load the saved
    /// history.
    ///
    /// A provider failure leaves the position at its prior value (the
    /// fallback constant on first run) and is reported as a dismissible
    /// notification; there is no automatic retry. History loads
    /// regardless of the fetch outcome, and a malformed blob is silently
    /// treated as empty.
    pub fn initialize(&mut self) -> Notification {
        let fix_result = self.acquire_position();

        // History is non-critical cached data; corruption falls back to
        // empty inside load_history.
        self.state.history = history::load_history(self.store.as_ref());
        info!("loaded {} saved locations", self.state.history.len());

        match fix_result {
            Ok(coordinate) => {
                info!(
                    "position fix ({:.5}, {:.5})",
                    coordinate.latitude, coordinate.longitude
                );
                Notification::success("Located current position")
            }
            Err(e) => {
                error!("position fix failed: {}", e);
                Notification::from(e)
            }
        }
    }

    fn acquire_position(&mut self) -> ControllerResult<Coordinate> {
        ensure_permission(self.provider.as_mut())?;
        let coordinate = self.provider.fetch_position(&self.fetch_options)?;

        self.state.position = coordinate;
        self.state.start = Some(coordinate);
        self.state.refresh_derived();
        Ok(coordinate)
    }

    /// Plan a route to the named destination.
    ///
    /// No geocoding happens: the name is accepted as free text and the
    /// end point is always the stub destination coordinate. An empty
    /// name is rejected with a warning and changes nothing.
    pub fn plan_route(&mut self, destination_name: &str) -> Notification {
        if destination_name.is_empty() {
            warn!("route planning rejected: empty destination");
            return Notification::from(ControllerError::Validation {
                field: "destination".to_string(),
                reason: "please enter a destination".to_string(),
            });
        }

        self.state.end = Some(STUB_DESTINATION);
        self.state.end_label = destination_name.to_string();
        self.state.refresh_derived();

        info!("route planned to \"{}\"", destination_name);
        Notification::success("Route planned")
    }

    /// Save the current position to the history and write it through.
    ///
    /// The store write is the whole history list, not an incremental
    /// append. If the write fails the in-memory append is rolled back so
    /// memory and storage stay consistent, and the failure is surfaced.
    pub fn save_current_location(&mut self) -> Notification {
        let now = Local::now();
        let entry = SavedLocation {
            id: Utc::now().timestamp_millis(),
            name: format!("Location {}", now.format("%Y-%m-%d %H:%M:%S")),
            coordinate: self.state.position,
            saved_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        self.state.history.push(entry);
        if let Err(e) = history::store_history(self.store.as_mut(), &self.state.history) {
            self.state.history.pop();
            error!("saving location failed: {}", e);
            return Notification::from(ControllerError::from(e));
        }

        info!("saved location, history now {} entries", self.state.history.len());
        Notification::success("Location saved")
    }

    /// Promote a history entry to the route end point and hide the panel
    pub fn select_history_entry(&mut self, entry: &SavedLocation) -> Notification {
        self.state.end = Some(entry.coordinate);
        self.state.end_label = entry.name.clone();
        self.state.show_history = false;
        self.state.refresh_derived();

        info!("history entry \"{}\" set as destination", entry.name);
        Notification::success("Destination set")
    }

    /// Flip the history panel visibility; no other side effects
    pub fn toggle_history_panel(&mut self) {
        self.state.show_history = !self.state.show_history;
    }

    /// Tap on the map surface. Observable but unused: the coordinates are
    /// only logged, no state changes.
    pub fn handle_map_tap(&mut self, event: TapEvent) {
        debug!("map tapped at ({:.5}, {:.5})", event.latitude, event.longitude);
    }
}
