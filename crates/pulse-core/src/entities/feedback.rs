//! Feedback entity - anonymous free-text feedback on an event

use chrono::{DateTime, Utc};

use crate::value_objects::{EventId, FeedbackId};

/// Feedback entity
///
/// `rating` is meant to be 1-5 but the range is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: FeedbackId,
    pub event_id: EventId,
    pub message: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a caller when submitting feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub event_id: EventId,
    pub message: String,
    pub rating: Option<i32>,
}

impl Feedback {
    /// Create a Feedback record stamped with the current time
    pub fn new(id: FeedbackId, new: NewFeedback) -> Self {
        Self {
            id,
            event_id: new.event_id,
            message: new.message,
            rating: new.rating,
            created_at: Utc::now(),
        }
    }

    /// Check if this feedback belongs to an event
    #[inline]
    pub fn is_for(&self, event_id: EventId) -> bool {
        self.event_id == event_id
    }
}
