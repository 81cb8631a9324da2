use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/log/:kind", post(handlers::log_preset))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/activities",
            get(handlers::list_activities).post(handlers::log_activity),
        )
        .with_state(state)
}
