//! Service context - dependency container for services
//!
//! Holds the four repositories every service reads from or writes to.

use std::sync::Arc;

use pulse_core::traits::{
    AnnouncementRepository, EventRepository, FeedbackRepository, ReactionRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared by every request handler. Cloning is
/// cheap: only the `Arc`s are cloned.
#[derive(Clone)]
pub struct ServiceContext {
    event_repo: Arc<dyn EventRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
    announcement_repo: Arc<dyn AnnouncementRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
        announcement_repo: Arc<dyn AnnouncementRepository>,
    ) -> Self {
        Self {
            event_repo,
            reaction_repo,
            feedback_repo,
            announcement_repo,
        }
    }

    // === Repositories ===

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the feedback repository
    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    /// Get the announcement repository
    pub fn announcement_repo(&self) -> &dyn AnnouncementRepository {
        self.announcement_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("events", &self.event_repo.count())
            .field("feedback", &self.feedback_repo.count())
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    event_repo: Option<Arc<dyn EventRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    announcement_repo: Option<Arc<dyn AnnouncementRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn announcement_repo(mut self, repo: Arc<dyn AnnouncementRepository>) -> Self {
        self.announcement_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.feedback_repo
                .ok_or_else(|| ServiceError::validation("feedback_repo is required"))?,
            self.announcement_repo
                .ok_or_else(|| ServiceError::validation("announcement_repo is required"))?,
        ))
    }
}
