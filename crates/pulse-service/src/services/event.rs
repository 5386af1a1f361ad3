//! Event service
//!
//! Creates events and looks them up. Every new event gets a zero reaction
//! tally at creation time.

use pulse_core::{DomainError, EventId};
use tracing::{info, instrument};

use crate::dto::{CreateEventRequest, EventResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub fn create_event(&self, request: CreateEventRequest) -> EventResponse {
        let event = self.ctx.event_repo().create(request.into());
        self.ctx.reaction_repo().ensure(event.id);

        info!(event_id = %event.id, "Event created");

        EventResponse::from(event)
    }

    /// List all events in creation order
    pub fn list_events(&self) -> Vec<EventResponse> {
        self.ctx
            .event_repo()
            .list()
            .into_iter()
            .map(EventResponse::from)
            .collect()
    }

    /// Get an event by id
    #[instrument(skip(self))]
    pub fn get_event(&self, event_id: EventId) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .ok_or(DomainError::EventNotFound(event_id))?;

        Ok(EventResponse::from(event))
    }
}
