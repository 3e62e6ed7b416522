//! User-facing notifications
//!
//! Transient, dismissible messages returned by every controller
//! operation. The display layer shows them as toasts; the controller
//! never blocks on them.

use crate::controller::ControllerError;
use std::fmt;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl From<ControllerError> for Notification {
    fn from(error: ControllerError) -> Self {
        match &error {
            ControllerError::Validation { .. } => Notification::warning(error.to_string()),
            _ => Notification::error(error.to_string()),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NotificationKind::Success => write!(f, "[ok] {}", self.message),
            NotificationKind::Warning => write!(f, "[warn] {}", self.message),
            NotificationKind::Error => write!(f, "[error] {}", self.message),
        }
    }
}
