//! Reaction handlers

use axum::{extract::State, Json};
use pulse_service::{AddReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::{EventIdPath, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Add a reaction to an event
///
/// POST /api/reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.add_reaction(request)?;
    Ok(Json(response))
}

/// Get the reaction tally for an event
///
/// GET /api/reactions/{event_id}
pub async fn get_reactions(
    State(state): State<AppState>,
    EventIdPath(event_id): EventIdPath,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.get_reactions(event_id)?;
    Ok(Json(response))
}
