//! Health check handlers
//!
//! Service description at the root and a liveness probe.

use axum::Json;
use pulse_service::{HealthResponse, ServiceInfoResponse};

/// Service description with the endpoint map
///
/// GET /
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse::ok("College PR Event Dashboard API"))
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
