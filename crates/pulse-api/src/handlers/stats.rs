//! Dashboard statistics handler

use axum::{extract::State, Json};
use pulse_service::{StatsResponse, StatsService};

use crate::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsService::new(state.service_context()).get_stats())
}
