//! Announcement entity - the single rolling banner message

use chrono::{DateTime, Utc};

/// Announcement entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    /// Message installed when the process starts
    pub const DEFAULT_MESSAGE: &'static str =
        "Welcome to Event Pulse - Your hub for campus events and engagement!";

    /// Create an Announcement stamped with the current time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Announcement {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}
