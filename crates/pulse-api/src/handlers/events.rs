//! Event handlers

use axum::{extract::State, Json};
use pulse_service::{CreateEventRequest, EventResponse, EventService};

use crate::extractors::{EventIdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new event
///
/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateEventRequest>,
) -> Created<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    Created(Json(service.create_event(request)))
}

/// List all events
///
/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<EventResponse>> {
    let service = EventService::new(state.service_context());
    Json(service.list_events())
}

/// Get an event by id
///
/// GET /api/events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.get_event(event_id)?;
    Ok(Json(event))
}
