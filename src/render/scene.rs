//! Scene snapshot and renderer trait

use crate::core::{Coordinate, Marker, RouteSegment};

/// Read-only snapshot of everything the map surface needs to draw
///
/// Produced by the controller after each state change; the renderer never
/// mutates controller state through it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub center: Coordinate,
    pub markers: Vec<Marker>,
    pub segments: Vec<RouteSegment>,
}

impl MapScene {
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            markers: Vec::new(),
            segments: Vec::new(),
        }
    }
}

/// Tap on the map surface, reported back to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub latitude: f64,
    pub longitude: f64,
}

/// Stateless transform of a scene into drawable output
pub trait MapRenderer {
    fn draw(&self, scene: &MapScene) -> String;
}
