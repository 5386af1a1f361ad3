//! Domain entities - the four dashboard resources

mod announcement;
mod event;
mod feedback;
mod reaction;

pub use announcement::Announcement;
pub use event::{Event, NewEvent};
pub use feedback::{Feedback, NewFeedback};
pub use reaction::{ReactionKind, ReactionTally};
