//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AnnouncementRepository, EventRepository, FeedbackRepository, ReactionRepository,
};
