//! # pulse-store
//!
//! Storage layer implementing the repository traits from `pulse-core` in
//! process memory.
//!
//! ## Overview
//!
//! - One repository per resource: events, reactions, feedback, announcement
//! - Events and feedback each own an [`IdAllocator`](pulse_core::IdAllocator)
//! - [`seed_default_events`] installs the three sample events at startup
//!
//! Nothing here survives a restart.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_store::{seed_default_events, MemEventRepository, MemReactionRepository};
//!
//! let events = MemEventRepository::new();
//! let reactions = MemReactionRepository::new();
//! seed_default_events(&events, &reactions)?;
//! ```

pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use repositories::{
    MemAnnouncementRepository, MemEventRepository, MemFeedbackRepository, MemReactionRepository,
};
pub use seed::{seed_default_events, SeedError, SeedEvent, DEFAULT_EVENTS};
