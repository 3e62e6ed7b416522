//! Map rendering surface
//!
//! The renderer is a stateless transform of the controller's scene
//! snapshot into drawable primitives. Tap events on the drawn surface
//! flow back to the controller as [`TapEvent`]s.

pub mod scene;
pub mod text;

pub use scene::{MapRenderer, MapScene, TapEvent};
pub use text::TextRenderer;
