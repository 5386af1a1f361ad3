//! Shared fixtures for service tests

use std::sync::Arc;

use pulse_store::{
    seed_default_events, MemAnnouncementRepository, MemEventRepository, MemFeedbackRepository,
    MemReactionRepository,
};

use super::context::{ServiceContext, ServiceContextBuilder};

/// Fresh in-memory context with the three default events seeded
pub(crate) fn seeded_context() -> ServiceContext {
    let events = Arc::new(MemEventRepository::new());
    let reactions = Arc::new(MemReactionRepository::new());
    seed_default_events(events.as_ref(), reactions.as_ref()).unwrap();

    ServiceContextBuilder::new()
        .event_repo(events)
        .reaction_repo(reactions)
        .feedback_repo(Arc::new(MemFeedbackRepository::new()))
        .announcement_repo(Arc::new(MemAnnouncementRepository::default()))
        .build()
        .unwrap()
}
