//! Request DTOs for API endpoints
//!
//! Shape and type checks happen during deserialization: a missing field, a
//! wrongly typed value or an unknown reaction never reaches a service.

use pulse_core::{EventId, NewEvent, NewFeedback, ReactionKind};
use serde::Deserialize;

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    /// ISO-8601 timestamp, stored as given
    pub date: String,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        NewEvent::new(request.title, request.description, request.date)
    }
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
#[derive(Debug, Clone, Deserialize)]
pub struct AddReactionRequest {
    pub event_id: EventId,
    /// One of fire, wow, clap, heart (or the matching emoji)
    pub reaction: ReactionKind,
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Submit feedback request
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub event_id: EventId,
    pub message: String,
    /// 1-5 stars
    #[serde(default)]
    pub rating: Option<i32>,
}

impl From<SubmitFeedbackRequest> for NewFeedback {
    fn from(request: SubmitFeedbackRequest) -> Self {
        NewFeedback {
            event_id: request.event_id,
            message: request.message,
            rating: request.rating,
        }
    }
}

// ============================================================================
// Announcement Requests
// ============================================================================

/// Create or replace announcement request
#[derive(Debug, Clone, Deserialize)]
pub struct SetAnnouncementRequest {
    pub message: String,
}
