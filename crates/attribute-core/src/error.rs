//! Error types for attribute access.

use std::fmt;
use thiserror::Error;

/// The direction of an attribute access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Reading the attribute into a value box
    Get,
    /// Writing the attribute from a value box
    Set,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Get => f.write_str("getter"),
            AccessKind::Set => f.write_str("setter"),
        }
    }
}

/// Why an attribute get or set did not happen.
///
/// None of these leave a side effect on the target object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The object handle is not (and does not derive from) the bound type
    #[error("object type mismatch: expected {expected}, got {actual}")]
    ObjectTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The value handle is not the bound value-box type
    #[error("value type mismatch: expected {expected}, got {actual}")]
    ValueTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The value box could not produce the raw value type
    #[error("cannot extract {target} from {value_type}")]
    UnboxFailure {
        value_type: &'static str,
        target: &'static str,
    },

    /// The binding has no getter or no setter
    #[error("attribute has no {operation}")]
    UnsupportedOperation { operation: AccessKind },

    /// A checked setter declined the value
    #[error("setter rejected the value")]
    SetterRejected,
}

impl AccessError {
    /// Create an "unsupported operation" error.
    pub fn unsupported(operation: AccessKind) -> Self {
        AccessError::UnsupportedOperation { operation }
    }
}
