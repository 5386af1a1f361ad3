//! Announcement handlers

use axum::{extract::State, Json};
use pulse_service::{AnnouncementResponse, AnnouncementService, SetAnnouncementRequest};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Replace the current announcement
///
/// POST /api/announcement
pub async fn set_announcement(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SetAnnouncementRequest>,
) -> Json<AnnouncementResponse> {
    let service = AnnouncementService::new(state.service_context());
    Json(service.set_announcement(request))
}

/// Get the current announcement
///
/// GET /api/announcement
pub async fn get_announcement(State(state): State<AppState>) -> Json<AnnouncementResponse> {
    let service = AnnouncementService::new(state.service_context());
    Json(service.get_announcement())
}
