//! Location provider error types

use std::fmt;

/// Errors surfaced by a location provider
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// The user or platform refused location access
    PermissionDenied,
    /// The provider could not produce a position fix
    PositionUnavailable { details: String },
    /// The provider itself failed (platform exception, dead service)
    ProviderFailure { details: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => {
                write!(f, "Location permission denied")
            }
            LocationError::PositionUnavailable { details } => {
                write!(f, "Position unavailable: {}", details)
            }
            LocationError::ProviderFailure { details } => {
                write!(f, "Location provider failure: {}", details)
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Result type for location provider operations
pub type LocationResult<T> = Result<T, LocationError>;
