//! Event entity - a campus event shown on the dashboard

use chrono::{DateTime, Utc};

use crate::value_objects::EventId;

/// Event entity
///
/// Immutable once stored. `date` is kept exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a caller when creating an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
}

impl NewEvent {
    /// Create a new NewEvent
    pub fn new(title: impl Into<String>, description: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}

impl Event {
    /// Create an Event stamped with the current time
    pub fn new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            created_at: Utc::now(),
        }
    }
}
