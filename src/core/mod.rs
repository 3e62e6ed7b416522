//! Core data types for the map screen

pub mod constants;
pub mod types;

pub use constants::{
    DEFAULT_POSITION, END_MARKER_ID, HISTORY_STORAGE_KEY, ROUTE_COLOR, ROUTE_WIDTH,
    START_MARKER_ID, STUB_DESTINATION,
};
pub use types::{Coordinate, Marker, MarkerRole, RouteSegment, RouteStyle, SavedLocation};
