//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port with freshly
//! seeded in-memory stores; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use pulse_common::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Service Info & Health
// ============================================================================

#[tokio::test]
async fn test_root_describes_service() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "College PR Event Dashboard API");
    for (name, path) in [
        ("events", "/api/events"),
        ("reactions", "/api/reactions"),
        ("feedback", "/api/feedback"),
        ("announcement", "/api/announcement"),
    ] {
        assert_eq!(body["endpoints"][name], path);
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_seeded_events() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/events").await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, SEEDED_TITLES);
    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), [1, 2, 3]);

    for event in &events {
        let response = server.get(&format!("/api/reactions/{}", event.id)).await.unwrap();
        let tally: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(tally.reactions, Tally::default());
    }
}

#[tokio::test]
async fn test_create_event_ids_increase_from_four() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut ids = vec![];
    for title in ["Open Mic", "Hack Night", "Quiz Bowl"] {
        let response = server
            .post("/api/events", &CreateEventRequest::named(title))
            .await
            .unwrap();
        let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(event.title, title);
        ids.push(event.id);
    }
    assert_eq!(ids, [4, 5, 6]);

    let response = server.get("/api/events").await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[5].title, "Quiz Bowl");
}

#[tokio::test]
async fn test_new_event_has_zero_tally() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/events", &CreateEventRequest::named("Open Mic"))
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/api/reactions/{}", event.id)).await.unwrap();
    let tally: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tally.event_id, event.id);
    assert_eq!(tally.reactions, Tally::default());
}

#[tokio::test]
async fn test_get_event() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/events/3").await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(event.title, "V-MUN");
    assert_eq!(event.date, "2026-04-15T09:00:00");
    assert!(event.description.starts_with("Virtual Model United Nations"));
}

#[tokio::test]
async fn test_get_unknown_event() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/events/{MISSING_EVENT_ID}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_EVENT");
}

#[tokio::test]
async fn test_create_event_rejects_malformed_input() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/events", &json!({"title": "Only a title"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server
        .post("/api/events", &json!({"title": 7, "description": "x", "date": "y"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server.post_raw("/api/events", "{not json").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Nothing was stored
    let response = server.get("/api/events").await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(events.len(), 3);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_increments_once() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/reactions", &AddReactionRequest::new(1, "heart"))
        .await
        .unwrap();
    let added: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(added.event_id, 1);
    assert_eq!(added.reactions.heart, 1);

    let response = server.get("/api/reactions/1").await.unwrap();
    let read: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read.reactions, added.reactions);
}

#[tokio::test]
async fn test_reactions_accumulate_per_category() {
    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..4 {
        let response = server
            .post("/api/reactions", &AddReactionRequest::new(2, "clap"))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server
        .post("/api/reactions", &AddReactionRequest::new(2, "😮"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/reactions/2").await.unwrap();
    let read: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        read.reactions,
        Tally {
            fire: 0,
            wow: 1,
            clap: 4,
            heart: 0,
        }
    );
}

#[tokio::test]
async fn test_reaction_outside_fixed_set() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/reactions", &AddReactionRequest::new(1, "thumbsup"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_reaction_unknown_event_changes_nothing() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/reactions", &AddReactionRequest::new(MISSING_EVENT_ID, "fire"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/reactions/{MISSING_EVENT_ID}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/stats").await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_reactions, 0);
}

// ============================================================================
// Feedback Tests
// ============================================================================

#[tokio::test]
async fn test_submit_feedback() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/feedback", &SubmitFeedbackRequest::new(2, "Kites everywhere!", Some(5)))
        .await
        .unwrap();
    let first: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.event_id, 2);
    assert_eq!(first.rating, Some(5));

    let response = server
        .post("/api/feedback", &SubmitFeedbackRequest::new(1, "No rating", None))
        .await
        .unwrap();
    let second: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second.id, 2);
    assert_eq!(second.rating, None);
}

#[tokio::test]
async fn test_feedback_unknown_event() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/feedback",
            &SubmitFeedbackRequest::new(MISSING_EVENT_ID, "Where is this?", Some(1)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/feedback").await.unwrap();
    let all: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_feedback_for_event_is_ordered_subset() {
    let server = TestServer::start().await.expect("Failed to start server");

    for (event_id, message) in [(1, "first"), (3, "second"), (1, "third"), (2, "fourth")] {
        let response = server
            .post("/api/feedback", &SubmitFeedbackRequest::new(event_id, message, None))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/feedback").await.unwrap();
    let all: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.iter().map(|f| f.id).collect::<Vec<_>>(), [1, 2, 3, 4]);

    let response = server.get("/api/feedback/1").await.unwrap();
    let for_one: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let expected: Vec<&FeedbackResponse> = all.iter().filter(|f| f.event_id == 1).collect();
    assert_eq!(for_one.iter().collect::<Vec<_>>(), expected);
    assert_eq!(
        for_one.iter().map(|f| f.message.as_str()).collect::<Vec<_>>(),
        ["first", "third"]
    );

    let response = server
        .get(&format!("/api/feedback/{MISSING_EVENT_ID}"))
        .await
        .unwrap();
    let none: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(none.is_empty());
}

// ============================================================================
// Announcement Tests
// ============================================================================

#[tokio::test]
async fn test_default_announcement() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/announcement").await.unwrap();
    let current: AnnouncementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        current.message,
        "Welcome to Event Pulse - Your hub for campus events and engagement!"
    );
}

#[tokio::test]
async fn test_configured_announcement() {
    let mut config = AppConfig::default();
    config.app.announcement = "Fest week starts Monday".to_string();

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let response = server.get("/api/announcement").await.unwrap();
    let current: AnnouncementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current.message, "Fest week starts Monday");
}

#[tokio::test]
async fn test_set_announcement_replaces() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/announcement", &json!({"message": "Old"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let before = Utc::now();
    let response = server
        .post("/api/announcement", &json!({"message": "Hello"}))
        .await
        .unwrap();
    let set: AnnouncementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(set.message, "Hello");

    let response = server.get("/api/announcement").await.unwrap();
    let current: AnnouncementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current.message, "Hello");
    assert!(current.created_at >= before);
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_stats_are_live_aggregates() {
    let server = TestServer::start().await.expect("Failed to start server");

    for (event_id, message) in [(1, "Loved the music"), (3, "Great debates")] {
        let response = server
            .post("/api/feedback", &SubmitFeedbackRequest::new(event_id, message, Some(4)))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    for (event_id, reaction) in [(1, "fire"), (1, "fire"), (2, "wow"), (3, "clap"), (3, "❤️")] {
        let response = server
            .post("/api/reactions", &AddReactionRequest::new(event_id, reaction))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/stats").await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        stats,
        StatsResponse {
            total_events: 3,
            total_feedback: 2,
            total_reactions: 5,
        }
    );
}

#[tokio::test]
async fn test_servers_do_not_share_state() {
    let first = TestServer::start().await.expect("Failed to start server");
    let second = TestServer::start().await.expect("Failed to start server");

    let response = first
        .post("/api/events", &CreateEventRequest::named("Only here"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = second.get("/api/stats").await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_events, 3);
}
