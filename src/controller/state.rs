//! View state owned by the controller

use crate::core::{
    Coordinate, Marker, MarkerRole, RouteSegment, SavedLocation, DEFAULT_POSITION, END_MARKER_ID,
    START_MARKER_ID,
};

/// Flat record of everything the screen shows
///
/// There is no state machine here: every field is independently optional
/// and every controller operation is callable in any reachable state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Last known device position; defaults to a fixed fallback until the
    /// first successful fix
    pub position: Coordinate,
    /// Route start point, set by a successful position fix
    pub start: Option<Coordinate>,
    /// Label shown on the start marker
    pub start_label: String,
    /// Route end point, set by route planning or history selection
    pub end: Option<Coordinate>,
    /// Label shown on the end marker (destination name)
    pub end_label: String,
    /// Derived markers, rebuilt from scratch on every start/end change
    pub markers: Vec<Marker>,
    /// Straight-line route; present only while both endpoints are set
    pub route: Option<RouteSegment>,
    /// Saved-location history, append-only in memory
    pub history: Vec<SavedLocation>,
    /// Whether the history panel is visible (never persisted)
    pub show_history: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            start: None,
            start_label: "Current location".to_string(),
            end: None,
            end_label: String::new(),
            markers: Vec::new(),
            route: None,
            history: Vec::new(),
            show_history: false,
        }
    }

    /// Rebuild the marker list and route segment from the current
    /// start/end fields. Always a full recomputation, so a stale marker
    /// for a cleared endpoint cannot survive.
    pub fn refresh_derived(&mut self) {
        self.markers.clear();

        if let Some(start) = self.start {
            self.markers.push(Marker {
                id: START_MARKER_ID,
                coordinate: start,
                role: MarkerRole::Start,
                label: self.start_label.clone(),
            });
        }

        if let Some(end) = self.end {
            self.markers.push(Marker {
                id: END_MARKER_ID,
                coordinate: end,
                role: MarkerRole::End,
                label: self.end_label.clone(),
            });
        }

        self.route = match (self.start, self.end) {
            (Some(start), Some(end)) => Some(RouteSegment::new(start, end)),
            _ => None,
        };
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_fallback_position() {
        let state = ViewState::new();
        assert_eq!(state.position, DEFAULT_POSITION);
        assert!(state.start.is_none());
        assert!(state.markers.is_empty());
        assert!(state.route.is_none());
        assert!(!state.show_history);
    }

    #[test]
    fn test_markers_one_per_set_endpoint() {
        let mut state = ViewState::new();
        state.refresh_derived();
        assert!(state.markers.is_empty());

        state.start = Some(Coordinate::new(39.91, 116.40));
        state.refresh_derived();
        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.markers[0].id, START_MARKER_ID);
        assert_eq!(state.markers[0].role, MarkerRole::Start);
        assert!(state.route.is_none());

        state.end = Some(Coordinate::new(39.9042, 116.4074));
        state.refresh_derived();
        assert_eq!(state.markers.len(), 2);
        assert_eq!(state.markers[1].id, END_MARKER_ID);
        assert_eq!(state.markers[1].role, MarkerRole::End);
        assert!(state.route.is_some());
    }

    #[test]
    fn test_clearing_endpoint_drops_its_marker_and_route() {
        let mut state = ViewState::new();
        state.start = Some(Coordinate::new(39.91, 116.40));
        state.end = Some(Coordinate::new(39.9042, 116.4074));
        state.refresh_derived();
        assert_eq!(state.markers.len(), 2);

        state.end = None;
        state.refresh_derived();
        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.markers[0].role, MarkerRole::Start);
        assert!(state.route.is_none());
    }

    #[test]
    fn test_route_connects_start_to_end() {
        let start = Coordinate::new(39.91, 116.40);
        let end = Coordinate::new(39.9042, 116.4074);
        let mut state = ViewState::new();
        state.start = Some(start);
        state.end = Some(end);
        state.refresh_derived();

        let route = state.route.unwrap();
        assert_eq!(route.points, [start, end]);
    }
}
