use crate::display::logged_message;
use crate::errors::AppError;
use crate::models::{
    ActivityLog, ActivityRecord, Dashboard, LogActivityRequest, LogActivityResponse, RangeQuery,
    find_preset,
};
use crate::range::filter_by_range;
use crate::state::AppState;
use crate::stats::build_dashboard;
use crate::storage::persist_log;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, Utc};
use tracing::info;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Html<String>, AppError> {
    let range = query.to_range()?;
    let log = state.log.lock().await;
    let dashboard = build_dashboard(&log, &state.ranks, range);
    Ok(Html(render_index(&dashboard)))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let range = query.to_range()?;
    let log = state.log.lock().await;
    Ok(Json(build_dashboard(&log, &state.ranks, range)))
}

pub async fn list_activities(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<ActivityLog>, AppError> {
    let range = query.to_range()?;
    let log = state.log.lock().await;
    Ok(Json(filter_by_range(&log, range, &Local)))
}

pub async fn log_activity(
    State(state): State<AppState>,
    Json(payload): Json<LogActivityRequest>,
) -> Result<Json<LogActivityResponse>, AppError> {
    let kind = payload.kind.trim();
    if kind.is_empty() {
        return Err(AppError::bad_request("type must not be empty"));
    }
    if !payload.points.is_finite() {
        return Err(AppError::bad_request("points must be a finite number"));
    }

    let response = apply_activity(&state, kind, payload.points).await?;
    Ok(Json(response))
}

pub async fn log_preset(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Redirect, AppError> {
    let preset = find_preset(&kind).ok_or_else(|| AppError::not_found(format!("unknown activity '{kind}'")))?;
    apply_activity(&state, preset.kind, preset.points).await?;
    Ok(Redirect::to("/"))
}

/// Appends and saves while holding the lock; a failed save is undone in memory.
async fn apply_activity(state: &AppState, kind: &str, points: f64) -> Result<LogActivityResponse, AppError> {
    let record = ActivityRecord::new(kind, points, Utc::now());
    let mut log = state.log.lock().await;
    log.append(record.clone());

    if let Err(err) = persist_log(&state.data_path, &log).await {
        log.pop();
        return Err(err);
    }

    let status = logged_message(kind, points);
    info!(kind, points, total = log.len(), "{status}");

    Ok(LogActivityResponse {
        status,
        record,
        dashboard: build_dashboard(&log, &state.ranks, None),
    })
}
