//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business rules and orchestrate repository operations.

pub mod announcement;
pub mod context;
pub mod error;
pub mod event;
pub mod feedback;
pub mod reaction;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use announcement::AnnouncementService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use feedback::FeedbackService;
pub use reaction::ReactionService;
pub use stats::StatsService;
