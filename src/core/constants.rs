//! Fixed values shared across the map screen

use crate::core::types::Coordinate;

/// Map center shown before the first successful position fix
pub const DEFAULT_POSITION: Coordinate = Coordinate {
    latitude: 39.909,
    longitude: 116.39742,
};

/// Destination used for every planned route.
///
/// Route planning accepts a free-text destination name but performs no
/// geocoding; the name is never resolved and this coordinate is used
/// instead. Deliberate stub, not a defect.
pub const STUB_DESTINATION: Coordinate = Coordinate {
    latitude: 39.9042,
    longitude: 116.4074,
};

/// Marker id reserved for the route start point
pub const START_MARKER_ID: u32 = 1;

/// Marker id reserved for the route end point
pub const END_MARKER_ID: u32 = 2;

/// Key under which the saved-location history blob is stored
pub const HISTORY_STORAGE_KEY: &str = "savedLocations";

/// Default polyline color for the route segment
pub const ROUTE_COLOR: &str = "#007AFF";

/// Default polyline width for the route segment
pub const ROUTE_WIDTH: u32 = 4;
