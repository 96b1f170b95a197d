//! Censorship check

use axum::{extract::State, Json};

use safety_guard_core::logic::probe::{check_censorship, CheckSummary};

use crate::AppState;
use crate::middleware::auth::SessionContext;

/// Probe the configured targets concurrently
pub async fn censorship_check(
    State(state): State<AppState>,
    session: SessionContext,
) -> Json<CheckSummary> {
    tracing::info!("Censorship check requested by '{}'", session.username);
    let config = &state.config;
    Json(check_censorship(&state.http, &config.probe_targets, config.probe_timeout).await)
}
