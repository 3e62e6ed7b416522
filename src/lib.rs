//! Map Location & Route Screen
//!
//! A single-screen location-and-route utility core: acquires the device
//! position, lets the user designate a destination, derives markers and a
//! straight-line route segment, and persists a saved-location history
//! through a string-keyed store. Platform services are modelled as traits
//! with mock implementations for testing.

pub mod controller;
pub mod core;
pub mod provider;
pub mod render;
pub mod storage;

// Re-export commonly used types
pub use controller::{MapController, Notification, NotificationKind, ViewState};
pub use core::{Coordinate, Marker, MarkerRole, RouteSegment, RouteStyle, SavedLocation};
pub use provider::{FetchOptions, LocationError, LocationProvider, MockLocationProvider, PrecisionMode};
pub use render::{MapRenderer, MapScene, TapEvent, TextRenderer};
pub use storage::{InMemoryStore, KeyValueStore, StorageError};
