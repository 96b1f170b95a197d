//! App integrity lookup

use axum::{extract::{Query, State}, Json};
use serde::{Deserialize, Serialize};

use safety_guard_core::logic::knowledge::{search_apps, AppLookup};
use safety_guard_core::LoadState;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AppQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct AppSearchResponse {
    pub state: LoadState,
    /// Apps in the merged catalog
    pub total: usize,
    pub lookup: AppLookup,
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<AppQuery>,
) -> Json<AppSearchResponse> {
    let catalog = state.feeds.load_apps().await;

    Json(AppSearchResponse {
        state: catalog.state,
        total: catalog.records.len(),
        lookup: search_apps(&catalog.records, &query.q),
    })
}
