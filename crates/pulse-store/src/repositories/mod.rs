//! Repository implementations
//!
//! In-memory implementations of the repository traits defined in pulse-core.
//! Each repository owns the storage for a single resource.

mod announcement;
mod event;
mod feedback;
mod reaction;

pub use announcement::MemAnnouncementRepository;
pub use event::MemEventRepository;
pub use feedback::MemFeedbackRepository;
pub use reaction::MemReactionRepository;
