//! Value objects - identifiers and their allocator

mod ids;

pub use ids::{EventId, FeedbackId, IdAllocator, IdParseError};
