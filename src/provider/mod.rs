//! Location provider abstraction
//!
//! This module isolates the platform positioning service behind a trait,
//! so the controller can be exercised against a mock provider.

pub mod error;
pub mod location;
pub mod mock;

pub use error::{LocationError, LocationResult};
pub use location::{FetchOptions, LocationProvider, PrecisionMode};
pub use mock::MockLocationProvider;
