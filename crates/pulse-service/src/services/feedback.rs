//! Feedback service

use pulse_core::{DomainError, EventId};
use tracing::{info, instrument};

use crate::dto::{FeedbackResponse, SubmitFeedbackRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit feedback for an existing event
    #[instrument(skip(self, request), fields(event_id = %request.event_id))]
    pub fn submit_feedback(&self, request: SubmitFeedbackRequest) -> ServiceResult<FeedbackResponse> {
        if !self.ctx.event_repo().exists(request.event_id) {
            return Err(DomainError::EventNotFound(request.event_id).into());
        }

        let feedback = self.ctx.feedback_repo().create(request.into());

        info!(feedback_id = %feedback.id, rating = ?feedback.rating, "Feedback submitted");

        Ok(FeedbackResponse::from(feedback))
    }

    /// All feedback across every event, oldest first
    pub fn list_feedback(&self) -> Vec<FeedbackResponse> {
        self.ctx
            .feedback_repo()
            .list()
            .into_iter()
            .map(FeedbackResponse::from)
            .collect()
    }

    /// Feedback for one event, oldest first
    ///
    /// Unknown events simply have no feedback.
    pub fn list_event_feedback(&self, event_id: EventId) -> Vec<FeedbackResponse> {
        self.ctx
            .feedback_repo()
            .list_by_event(event_id)
            .into_iter()
            .map(FeedbackResponse::from)
            .collect()
    }
}
