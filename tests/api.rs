//! In-process router tests.

use activity_rank::models::{ActivityLog, ActivityRecord};
use activity_rank::{router, AppState, RankTable};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, Utc};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

fn temp_path(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("activity_rank_api_{tag}_{}_{nanos}.json", std::process::id()))
}

fn app_with(tag: &str, log: ActivityLog) -> (Router, AppState) {
    let state = AppState::new(temp_path(tag), RankTable::standard().unwrap(), log);
    (router(state.clone()), state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn empty_dashboard_starts_at_first_rank() {
    let (app, _) = app_with("empty", ActivityLog::new());
    let (status, body) = send(app, get("/api/dashboard")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total_points"], 0.0);
    assert_eq!(json["rank"]["name"], "Turtle");
    assert_eq!(json["rank"]["at_max_tier"], false);
    assert_eq!(json["goal"]["daily_goal"], 50.0);
    assert_eq!(json["goal"]["remaining"], 50.0);
    assert_eq!(json["daily_points"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn logging_appends_persists_and_reports() {
    let (app, state) = app_with("log", ActivityLog::new());
    let (status, body) = send(
        app.clone(),
        post_json("/api/activities", serde_json::json!({ "type": "bike", "points": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "Logged: bike (+30 points)");
    assert_eq!(json["record"]["type"], "bike");
    assert_eq!(json["dashboard"]["goal"]["today_points"], 30.0);
    assert_eq!(json["dashboard"]["rank"]["progress_percent"], 7.5);

    let saved = activity_rank::load_log(&state.data_path).await;
    assert_eq!(saved.len(), 1);
    assert_eq!(state.log.lock().await.len(), 1);

    let (_, body) = send(
        app,
        post_json("/api/activities", serde_json::json!({ "type": "car", "points": -5 })),
    )
    .await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "Logged: car (-5 points)");
    assert_eq!(json["dashboard"]["total_points"], 25.0);

    let _ = std::fs::remove_file(&state.data_path);
}

#[tokio::test]
async fn rejects_blank_activity_type() {
    let (app, state) = app_with("blank", ActivityLog::new());
    let (status, _) = send(
        app,
        post_json("/api/activities", serde_json::json!({ "type": "  ", "points": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.log.lock().await.is_empty());
}

#[tokio::test]
async fn failed_save_leaves_log_unchanged() {
    let missing_dir = temp_path("nodir").join("nested").join("activities.json");
    let state = AppState::new(missing_dir, RankTable::standard().unwrap(), ActivityLog::new());
    let app = router(state.clone());

    let (status, _) = send(
        app,
        post_json("/api/activities", serde_json::json!({ "type": "walk", "points": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(state.log.lock().await.is_empty());
}

#[tokio::test]
async fn range_query_filters_the_view_only() {
    let now = Utc::now();
    let old = now - Duration::days(30);
    let log = ActivityLog::from(vec![
        ActivityRecord::new("walk", 20.0, old),
        ActivityRecord::new("bike", 15.0, now),
    ]);
    let (app, state) = app_with("range", log);

    let day = now.with_timezone(&Local).date_naive().format("%Y-%m-%d").to_string();
    let (status, body) = send(app.clone(), get(&format!("/api/dashboard?start={day}&end={day}"))).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["activity_count"], 1);
    assert_eq!(json["total_points"], 15.0);
    assert_eq!(json["range"]["start"], day);

    let (_, body) = send(app.clone(), get(&format!("/api/activities?start={day}&end={day}"))).await;
    let listed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["type"], "bike");

    let (_, body) = send(app, get(&format!("/api/dashboard?start={day}&end="))).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["activity_count"], 2);
    assert_eq!(state.log.lock().await.len(), 2);
}

#[tokio::test]
async fn malformed_range_is_rejected() {
    let (app, _) = app_with("badrange", ActivityLog::new());
    let (status, body) = send(app, get("/api/dashboard?start=yesterday&end=2024-01-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8(body).unwrap().contains("start"));
}

#[tokio::test]
async fn preset_form_redirects_home() {
    let (app, state) = app_with("preset", ActivityLog::new());
    let request = Request::builder()
        .method("POST")
        .uri("/log/walk")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(state.log.lock().await.records()[0].points, 10.0);

    let unknown = Request::builder()
        .method("POST")
        .uri("/log/rocket")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, unknown).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let _ = std::fs::remove_file(&state.data_path);
}

#[tokio::test]
async fn index_renders_rank() {
    let (app, _) = app_with("index", ActivityLog::new());
    let (status, body) = send(app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Activity Rank"));
    assert!(html.contains("Next rank: Lizard"));
}
