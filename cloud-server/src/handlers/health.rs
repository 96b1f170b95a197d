//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use safety_guard_core::logic::feed::FeedHealth;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    feeds: Vec<FeedHealth>,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        feeds: state.feeds.tracker().snapshot(),
    })
}
