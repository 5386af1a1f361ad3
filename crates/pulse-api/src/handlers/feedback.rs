//! Feedback handlers

use axum::{extract::State, Json};
use pulse_service::{FeedbackResponse, FeedbackService, SubmitFeedbackRequest};

use crate::extractors::{EventIdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit feedback for an event
///
/// POST /api/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SubmitFeedbackRequest>,
) -> ApiResult<Created<Json<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let feedback = service.submit_feedback(request)?;
    Ok(Created(Json(feedback)))
}

/// List all feedback
///
/// GET /api/feedback
pub async fn list_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackResponse>> {
    let service = FeedbackService::new(state.service_context());
    Json(service.list_feedback())
}

/// List feedback for one event
///
/// GET /api/feedback/{event_id}
pub async fn list_event_feedback(
    State(state): State<AppState>,
    EventIdPath(event_id): EventIdPath,
) -> Json<Vec<FeedbackResponse>> {
    let service = FeedbackService::new(state.service_context());
    Json(service.list_event_feedback(event_id))
}
