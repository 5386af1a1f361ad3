//! # pulse-core
//!
//! Domain layer for the campus event dashboard: entities, identifiers,
//! repository traits and domain errors. No web framework or storage code lives here.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Announcement, Event, Feedback, NewEvent, NewFeedback, ReactionKind, ReactionTally};
pub use error::DomainError;
pub use traits::{AnnouncementRepository, EventRepository, FeedbackRepository, ReactionRepository};
pub use value_objects::{EventId, FeedbackId, IdAllocator, IdParseError};
