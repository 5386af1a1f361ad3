//! Reaction service
//!
//! Both operations check the event store first; an unknown event leaves the
//! reaction store untouched.

use pulse_core::{DomainError, EventId, ReactionTally};
use tracing::{info, instrument};

use crate::dto::{AddReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add one reaction to an event and return the updated tally
    #[instrument(skip(self, request), fields(event_id = %request.event_id, reaction = %request.reaction))]
    pub fn add_reaction(&self, request: AddReactionRequest) -> ServiceResult<ReactionResponse> {
        self.require_event(request.event_id)?;

        let reactions = self
            .ctx
            .reaction_repo()
            .increment(request.event_id, request.reaction);

        info!(
            count = reactions.get(request.reaction),
            "Reaction added"
        );

        Ok(ReactionResponse {
            event_id: request.event_id,
            reactions,
        })
    }

    /// Get the tally for an event
    ///
    /// An event without a stored tally reads as all zeros. Reading never
    /// creates a tally.
    #[instrument(skip(self))]
    pub fn get_reactions(&self, event_id: EventId) -> ServiceResult<ReactionResponse> {
        self.require_event(event_id)?;

        let reactions = self
            .ctx
            .reaction_repo()
            .find(event_id)
            .unwrap_or_else(ReactionTally::zero);

        Ok(ReactionResponse {
            event_id,
            reactions,
        })
    }

    fn require_event(&self, event_id: EventId) -> ServiceResult<()> {
        if self.ctx.event_repo().exists(event_id) {
            Ok(())
        } else {
            Err(DomainError::EventNotFound(event_id).into())
        }
    }
}
