//! OONI overview proxy
//!
//! An unreachable OONI API mutes the panel instead of failing the request.

use axum::{extract::State, Json};
use serde::Serialize;

use safety_guard_core::logic::feed::{fetch_overview, ooni::explorer_url, OoniStats};
use safety_guard_core::LoadState;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct OoniResponse {
    pub country: String,
    pub state: LoadState,
    pub stats: Option<OoniStats>,
    pub explorer_url: String,
}

pub async fn overview(State(state): State<AppState>) -> Json<OoniResponse> {
    let country = &state.config.ooni_country;

    let (load_state, stats) =
        match fetch_overview(&state.http, &state.config.ooni_overview_url, country).await {
            Ok(stats) => (LoadState::Loaded, Some(stats)),
            Err(e) => {
                tracing::warn!("OONI overview unavailable: {}", e);
                (LoadState::Unavailable, None)
            }
        };

    Json(OoniResponse {
        country: country.clone(),
        state: load_state,
        stats,
        explorer_url: explorer_url(country),
    })
}
