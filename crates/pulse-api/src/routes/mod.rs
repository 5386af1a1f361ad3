//! Route definitions
//!
//! Dashboard routes are mounted under /api; the service description and
//! liveness probe sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{announcement, events, feedback, health, reactions, stats};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

/// Dashboard API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(event_routes())
        .merge(reaction_routes())
        .merge(feedback_routes())
        .merge(announcement_routes())
        .route("/stats", get(stats::get_stats))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/:event_id", get(events::get_event))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions", post(reactions::add_reaction))
        .route("/reactions/:event_id", get(reactions::get_reactions))
}

/// Feedback routes
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/feedback", get(feedback::list_feedback).post(feedback::submit_feedback))
        .route("/feedback/:event_id", get(feedback::list_event_feedback))
}

/// Announcement routes
fn announcement_routes() -> Router<AppState> {
    Router::new().route(
        "/announcement",
        get(announcement::get_announcement).post(announcement::set_announcement),
    )
}
