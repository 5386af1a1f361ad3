//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EventId, IdParseError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Unknown reaction '{0}': expected one of fire, wow, clap, heart")]
    UnknownReaction(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdParseError),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::UnknownReaction(_) => "UNKNOWN_REACTION",
            Self::InvalidId(_) => "INVALID_ID",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownReaction(_) | Self::InvalidId(_))
    }
}
