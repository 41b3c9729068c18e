//! Integration tests for coach-api endpoints
//!
//! Tests cover:
//! - Health and build info endpoints
//! - Transcript analysis (POST + cached GET, payload validation)
//! - Facial analysis (POST with/without signals, GET generate-then-reuse,
//!   unknown calls, bounded retention)

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use coach_api::{build_router, AppState, DEFAULT_RESULT_CAPACITY};
use coach_engine::{AuxiliaryMetrics, FacialEmotionSummary, FixedSignalSource};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: summary the fixed source hands out (scores 82 / 67 / 30)
fn source_summary() -> FacialEmotionSummary {
    FacialEmotionSummary {
        happy: 20,
        neutral: 50,
        nervous: 10,
        confused: 10,
        surprised: 10,
        angry: 0,
        total_frames: 100,
    }
}

/// Test helper: state backed by a deterministic signal source
fn setup_state(capacity: usize) -> AppState {
    let source = FixedSignalSource::new(
        source_summary(),
        AuxiliaryMetrics {
            eye_contact_percentage: 80,
            smile_frequency: 35,
            head_stability: 90,
        },
    );
    AppState::with_capacity(Box::new(source), capacity)
}

fn setup_app() -> axum::Router {
    build_router(setup_state(DEFAULT_RESULT_CAPACITY))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health / Build Info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "coach-api");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app();

    let response = app.oneshot(get_request("/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert!(json["git_hash"].is_string());
    assert!(json["build_profile"].is_string());
}

// =============================================================================
// Sentiment Analysis
// =============================================================================

#[tokio::test]
async fn test_sentiment_post_then_get() {
    let app = setup_app();

    let body = json!({
        "transcript": "I am confident and excited to collaborate with the team.",
        "call_id": "call-1"
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/sentiment-analysis", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let posted = extract_json(response.into_body()).await;
    assert_eq!(posted["success"], true);
    assert!(posted["data"]["sentimentScore"]["positive"].as_u64().unwrap() > 0);
    assert!(posted["data"]["softSkills"]["teamwork"].as_u64().unwrap() > 55);
    assert!(posted["bands"]["sentiment"].is_string());

    let response = app
        .oneshot(get_request("/api/sentiment-analysis?call_id=call-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = extract_json(response.into_body()).await;
    assert_eq!(fetched["data"], posted["data"]);
}

#[tokio::test]
async fn test_sentiment_filters_interviewer_entries() {
    let app = setup_app();

    let body = json!({
        "transcript": [
            {"speaker": "interviewer", "text": "Great, excellent, amazing!"},
            {"speaker": "Candidate", "text": "I built the pipeline."}
        ]
    });
    let response = app
        .oneshot(post_json("/api/sentiment-analysis", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["data"]["sentimentScore"]["positive"], 0);
}

#[tokio::test]
async fn test_sentiment_requires_transcript() {
    let app = setup_app();

    let response = app
        .oneshot(post_json("/api/sentiment-analysis", json!({"call_id": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["error"]["code"], "INVALID_PAYLOAD");
}

#[tokio::test]
async fn test_sentiment_rejects_malformed_transcript() {
    let app = setup_app();

    let response = app
        .oneshot(post_json("/api/sentiment-analysis", json!({"transcript": 42})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sentiment_get_unknown_call_is_404() {
    let app = setup_app();

    let response = app
        .oneshot(get_request("/api/sentiment-analysis?call_id=missing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_sentiment_get_without_call_id_is_400() {
    let app = setup_app();

    let response = app
        .oneshot(get_request("/api/sentiment-analysis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Facial Analysis
// =============================================================================

#[tokio::test]
async fn test_facial_post_requires_call_id() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/facial-analysis", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["error"]["message"], "call_id is required");

    let response = app
        .oneshot(post_json("/api/facial-analysis", json!({"call_id": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_facial_post_uses_supplied_summary() {
    let app = setup_app();

    let body = json!({
        "call_id": "call-7",
        "emotion_summary": {
            "happy": 0, "neutral": 0, "nervous": 0, "confused": 0,
            "surprised": 0, "angry": 0, "total_frames": 0
        }
    });
    let response = app
        .oneshot(post_json("/api/facial-analysis", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    let data = &json["data"];
    assert_eq!(data["confidenceIndex"], 70);
    assert_eq!(data["engagementScore"], 65);
    assert_eq!(data["stressIndicator"], 30);
    // Auxiliary metrics still come from the source
    assert_eq!(data["eyeContactPercentage"], 80);
    assert_eq!(data["emotionSummary"]["total_frames"], 0);
    assert!(json.get("generated").is_none());
}

#[tokio::test]
async fn test_facial_post_falls_back_to_source() {
    let app = setup_app();

    let response = app
        .oneshot(post_json("/api/facial-analysis", json!({"call_id": "call-8"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["data"]["confidenceIndex"], 82);
    assert_eq!(json["data"]["engagementScore"], 67);
    assert_eq!(json["data"]["stressIndicator"], 30);
    assert_eq!(json["bands"]["confidence"], "Excellent");
    assert_eq!(json["bands"]["engagement"], "Good");
    assert_eq!(json["bands"]["stress"], "Low Stress");
    assert_eq!(json["breakdown"]["happy"], 20.0);

    let suggestions = json["data"]["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["title"], "Smile Naturally");
}

#[tokio::test]
async fn test_facial_post_uses_supplied_auxiliary() {
    let app = setup_app();

    let body = json!({
        "call_id": "call-11",
        "auxiliary": {
            "eyeContactPercentage": 55,
            "smileFrequency": 12,
            "headStability": 70
        }
    });
    let response = app
        .oneshot(post_json("/api/facial-analysis", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["data"]["eyeContactPercentage"], 55);
    assert_eq!(json["data"]["smileFrequency"], 12);
    assert_eq!(json["data"]["headStability"], 70);
    // Summary still comes from the source
    assert_eq!(json["data"]["confidenceIndex"], 82);
}

#[tokio::test]
async fn test_facial_get_generates_then_reuses() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/sentiment-analysis",
            json!({"transcript": "I led the migration.", "call_id": "call-9"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request("/api/facial-analysis?call_id=call-9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = extract_json(response.into_body()).await;
    assert_eq!(first["generated"], true);

    let response = app
        .oneshot(get_request("/api/facial-analysis?call_id=call-9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let second = extract_json(response.into_body()).await;
    assert_eq!(second["generated"], false);
    assert_eq!(second["data"], first["data"]);
}

#[tokio::test]
async fn test_facial_get_returns_posted_result() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/facial-analysis", json!({"call_id": "call-10"})))
        .await
        .unwrap();
    let posted = extract_json(response.into_body()).await;

    let response = app
        .oneshot(get_request("/api/facial-analysis?call_id=call-10"))
        .await
        .unwrap();
    let fetched = extract_json(response.into_body()).await;
    assert_eq!(fetched["generated"], false);
    assert_eq!(fetched["data"]["analysisTimestamp"], posted["data"]["analysisTimestamp"]);
}

#[tokio::test]
async fn test_facial_get_without_call_id_is_400() {
    let app = setup_app();

    let response = app
        .oneshot(get_request("/api/facial-analysis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_facial_get_unknown_call_is_404_and_not_cached() {
    let state = setup_state(DEFAULT_RESULT_CAPACITY);
    let app = build_router(state.clone());

    for i in 0..50 {
        let uri = format!("/api/facial-analysis?call_id=never-posted-{}", i);
        let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    assert!(state.facial_results.read().await.is_empty());
    assert!(state.sentiment_results.read().await.is_empty());
}

#[tokio::test]
async fn test_results_are_bounded_by_capacity() {
    let state = setup_state(2);
    let app = build_router(state.clone());

    for call_id in ["call-a", "call-b", "call-c"] {
        let response = app
            .clone()
            .oneshot(post_json("/api/facial-analysis", json!({"call_id": call_id})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(state.facial_results.read().await.len(), 2);

    // Oldest call was evicted and has no transcript analysis either
    let response = app
        .clone()
        .oneshot(get_request("/api/facial-analysis?call_id=call-a"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get_request("/api/facial-analysis?call_id=call-c"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
