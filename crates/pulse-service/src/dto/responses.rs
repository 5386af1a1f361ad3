//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Identifiers are
//! plain JSON integers and timestamps are RFC 3339 strings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pulse_core::{EventId, FeedbackId, ReactionTally};
use serde::Serialize;

// ============================================================================
// Event Responses
// ============================================================================

/// Event response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction tally for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub event_id: EventId,
    pub reactions: ReactionTally,
}

// ============================================================================
// Feedback Responses
// ============================================================================

/// Feedback response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackResponse {
    pub id: FeedbackId,
    pub event_id: EventId,
    pub message: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Announcement Responses
// ============================================================================

/// Announcement response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementResponse {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Live dashboard totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub total_events: usize,
    pub total_feedback: usize,
    pub total_reactions: u64,
}

/// Service description returned from the root path
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub status: String,
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfoResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        let endpoints = [
            ("events", "/api/events"),
            ("reactions", "/api/reactions"),
            ("feedback", "/api/feedback"),
            ("announcement", "/api/announcement"),
            ("stats", "/api/stats"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        Self {
            status: "ok".to_string(),
            message: message.into(),
            endpoints,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
