//! Text renderer for terminals and tests

use crate::render::{MapRenderer, MapScene};
use std::fmt::Write;

/// Renders a scene as plain text, one line per primitive
pub struct TextRenderer {
    /// Include the route style in segment lines
    pub verbose: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapRenderer for TextRenderer {
    fn draw(&self, scene: &MapScene) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "center ({:.5}, {:.5})",
            scene.center.latitude, scene.center.longitude
        );

        for marker in &scene.markers {
            let _ = writeln!(
                out,
                "marker {} [{:?}] \"{}\" ({:.5}, {:.5})",
                marker.id,
                marker.role,
                marker.label,
                marker.coordinate.latitude,
                marker.coordinate.longitude
            );
        }

        for segment in &scene.segments {
            let _ = write!(
                out,
                "segment ({:.5}, {:.5}) -> ({:.5}, {:.5})",
                segment.points[0].latitude,
                segment.points[0].longitude,
                segment.points[1].latitude,
                segment.points[1].longitude
            );
            if self.verbose {
                let _ = write!(
                    out,
                    " [{} w{}{}]",
                    segment.style.color,
                    segment.style.width,
                    if segment.style.dashed { " dashed" } else { "" }
                );
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, Marker, MarkerRole, RouteSegment};

    #[test]
    fn test_empty_scene_draws_center_only() {
        let scene = MapScene::new(Coordinate::new(39.909, 116.39742));
        let drawn = TextRenderer::new().draw(&scene);
        assert_eq!(drawn.lines().count(), 1);
        assert!(drawn.starts_with("center"));
    }

    #[test]
    fn test_markers_and_segments_each_get_a_line() {
        let start = Coordinate::new(39.91, 116.40);
        let end = Coordinate::new(39.9042, 116.4074);
        let mut scene = MapScene::new(start);
        scene.markers.push(Marker {
            id: 1,
            coordinate: start,
            role: MarkerRole::Start,
            label: "Current location".to_string(),
        });
        scene.segments.push(RouteSegment::new(start, end));

        let drawn = TextRenderer::verbose().draw(&scene);
        assert_eq!(drawn.lines().count(), 3);
        assert!(drawn.contains("marker 1"));
        assert!(drawn.contains("#007AFF"));
    }
}
