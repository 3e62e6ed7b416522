//! Storage error types

use std::fmt;

/// Errors surfaced by the key-value store and history codec
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Reading a key failed at the store layer
    ReadFailure { key: String, details: String },
    /// Writing a key failed at the store layer
    WriteFailure { key: String, details: String },
    /// A stored blob failed to parse against the expected schema
    Corrupt { key: String, details: String },
    /// A value could not be serialized
    EncodeFailure { details: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailure { key, details } => {
                write!(f, "Failed to read key '{}': {}", key, details)
            }
            StorageError::WriteFailure { key, details } => {
                write!(f, "Failed to write key '{}': {}", key, details)
            }
            StorageError::Corrupt { key, details } => {
                write!(f, "Corrupt blob under key '{}': {}", key, details)
            }
            StorageError::EncodeFailure { details } => {
                write!(f, "Failed to encode value: {}", details)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
