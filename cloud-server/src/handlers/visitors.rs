//! Visitor counter handlers

use axum::{extract::State, http::HeaderMap, Json};

use safety_guard_core::logic::visitors::{client_ip, VisitResult};

use crate::AppState;
use crate::models::VisitorCount;
use super::forwarded_for;

pub async fn count(State(state): State<AppState>) -> Json<VisitorCount> {
    Json(VisitorCount {
        count: state.visitors.public_count().await,
    })
}

pub async fn record(State(state): State<AppState>, headers: HeaderMap) -> Json<VisitResult> {
    let ip = client_ip(forwarded_for(&headers));
    Json(state.visitors.record_visit(ip).await)
}
