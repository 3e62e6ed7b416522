//! Value types shared by the controller, renderer and storage layers

use crate::core::constants::{ROUTE_COLOR, ROUTE_WIDTH};
use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that the point lies within the valid geodetic range
    pub fn is_valid(&self) -> bool {
        self.latitude.abs() <= 90.0 && self.longitude.abs() <= 180.0
    }
}

/// Role a marker plays on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerRole {
    Start,
    End,
}

/// Renderable point annotation derived from the start/end locations
///
/// Markers are never patched in place; the whole list is rebuilt from the
/// current start/end state, so a marker for a cleared location cannot
/// survive an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: u32,
    pub coordinate: Coordinate,
    pub role: MarkerRole,
    pub label: String,
}

/// Polyline styling for the route segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    pub color: String,
    pub width: u32,
    pub dashed: bool,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: ROUTE_COLOR.to_string(),
            width: ROUTE_WIDTH,
            dashed: false,
        }
    }
}

/// Straight line connecting the start and end locations.
///
/// Exists only while both endpoints are set; there are no multi-waypoint
/// routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub points: [Coordinate; 2],
    pub style: RouteStyle,
}

impl RouteSegment {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            points: [start, end],
            style: RouteStyle::default(),
        }
    }
}

/// A user-saved position, immutable after creation
///
/// `id` is the creation time in epoch milliseconds; uniqueness is not
/// guaranteed for saves within the same millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLocation {
    pub id: i64,
    pub name: String,
    pub coordinate: Coordinate,
    pub saved_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(39.909, 116.39742).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(95.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -200.0).is_valid());
    }

    #[test]
    fn test_route_style_defaults() {
        let style = RouteStyle::default();
        assert_eq!(style.color, "#007AFF");
        assert_eq!(style.width, 4);
        assert!(!style.dashed);
    }

    #[test]
    fn test_route_segment_endpoints() {
        let start = Coordinate::new(39.91, 116.40);
        let end = Coordinate::new(39.9042, 116.4074);
        let segment = RouteSegment::new(start, end);
        assert_eq!(segment.points[0], start);
        assert_eq!(segment.points[1], end);
    }

    #[test]
    fn test_saved_location_json_shape() {
        let location = SavedLocation {
            id: 1700000000000,
            name: "Park".to_string(),
            coordinate: Coordinate::new(1.0, 2.0),
            saved_at: "2026-08-28 10:00:00".to_string(),
        };

        let json = serde_json::to_string(&location).unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"latitude\":1.0"));

        let decoded: SavedLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, location);
    }
}
