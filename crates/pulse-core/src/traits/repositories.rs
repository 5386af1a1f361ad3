//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the storage layer provides the
//! implementation. Every store lives in process memory, so none of these
//! operations can fail or suspend; lookups return `Option` and mutations
//! return the stored value directly.

use crate::entities::{Announcement, Event, Feedback, NewEvent, NewFeedback, ReactionKind, ReactionTally};
use crate::value_objects::EventId;

// ============================================================================
// Event Repository
// ============================================================================

pub trait EventRepository: Send + Sync {
    /// Allocate an id, stamp `created_at` and append the event
    fn create(&self, event: NewEvent) -> Event;

    /// All events in insertion order
    fn list(&self) -> Vec<Event>;

    /// Find an event by id
    fn find_by_id(&self, id: EventId) -> Option<Event>;

    /// Check whether an event exists
    fn exists(&self, id: EventId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Number of stored events
    fn count(&self) -> usize;
}

// ============================================================================
// Reaction Repository
// ============================================================================

pub trait ReactionRepository: Send + Sync {
    /// Install a zero tally for the event if none exists
    fn ensure(&self, event_id: EventId);

    /// Add one to a category, creating the tally if needed, and return the updated tally
    fn increment(&self, event_id: EventId, kind: ReactionKind) -> ReactionTally;

    /// Stored tally for an event, if any. Never creates one.
    fn find(&self, event_id: EventId) -> Option<ReactionTally>;

    /// Sum of every category across every tally
    fn total(&self) -> u64;
}

// ============================================================================
// Feedback Repository
// ============================================================================

pub trait FeedbackRepository: Send + Sync {
    /// Allocate an id, stamp `created_at` and append the feedback
    fn create(&self, feedback: NewFeedback) -> Feedback;

    /// All feedback in insertion order
    fn list(&self) -> Vec<Feedback>;

    /// Feedback for one event in insertion order
    fn list_by_event(&self, event_id: EventId) -> Vec<Feedback> {
        self.list()
            .into_iter()
            .filter(|feedback| feedback.is_for(event_id))
            .collect()
    }

    /// Number of stored feedback records
    fn count(&self) -> usize;
}

// ============================================================================
// Announcement Repository
// ============================================================================

pub trait AnnouncementRepository: Send + Sync {
    /// Replace the current announcement and return it
    fn set(&self, message: String) -> Announcement;

    /// Current announcement
    fn get(&self) -> Announcement;
}
