//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use pulse_core::entities::{Announcement, Event, Feedback};

use super::responses::{AnnouncementResponse, EventResponse, FeedbackResponse};

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            created_at: event.created_at,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            created_at: event.created_at,
        }
    }
}

// ============================================================================
// Feedback Mappers
// ============================================================================

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id,
            event_id: feedback.event_id,
            message: feedback.message.clone(),
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            event_id: feedback.event_id,
            message: feedback.message,
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}

// ============================================================================
// Announcement Mappers
// ============================================================================

impl From<Announcement> for AnnouncementResponse {
    fn from(announcement: Announcement) -> Self {
        Self {
            message: announcement.message,
            created_at: announcement.created_at,
        }
    }
}
