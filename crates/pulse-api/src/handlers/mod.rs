//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod announcement;
pub mod events;
pub mod feedback;
pub mod health;
pub mod reactions;
pub mod stats;
