//! Screen controller: owns the view state and implements the user-facing
//! operations (initialize, plan route, save location, history selection).

pub mod error;
pub mod map_controller;
pub mod notification;
pub mod state;

pub use error::{ControllerError, ControllerResult};
pub use map_controller::MapController;
pub use notification::{Notification, NotificationKind};
pub use state::ViewState;
