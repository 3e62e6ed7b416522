//! Controller error types

use crate::provider::LocationError;
use crate::storage::StorageError;
use std::fmt;

/// Errors caught at the controller boundary
///
/// None of these propagate past the controller; every operation converts
/// its error into a dismissible [`Notification`](crate::controller::Notification)
/// before returning.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// User input failed a precondition check
    Validation { field: String, reason: String },
    /// The location provider failed
    Location { source: LocationError },
    /// The key-value store failed
    Storage { source: StorageError },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Validation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            ControllerError::Location { source } => write!(f, "{}", source),
            ControllerError::Storage { source } => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Validation { .. } => None,
            ControllerError::Location { source } => Some(source),
            ControllerError::Storage { source } => Some(source),
        }
    }
}

impl From<LocationError> for ControllerError {
    fn from(source: LocationError) -> Self {
        ControllerError::Location { source }
    }
}

impl From<StorageError> for ControllerError {
    fn from(source: StorageError) -> Self {
        ControllerError::Storage { source }
    }
}

/// Result type for controller-internal steps
pub type ControllerResult<T> = Result<T, ControllerError>;
