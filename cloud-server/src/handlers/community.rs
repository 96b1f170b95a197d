//! Community status and dashboard handlers

use axum::{extract::{Query, State}, Json};
use serde::{Deserialize, Serialize};

use safety_guard_core::logic::community::{
    aggregate_by_vpn, list_isps, region_grid, RegionGrid, VpnStatusView, ALL_ISPS,
    DEFAULT_REGION, REGIONS,
};
use safety_guard_core::LoadState;

use crate::{AppState, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub isp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub state: LoadState,
    pub isps: Vec<String>,
    pub selected_isp: String,
    pub vpns: Vec<VpnStatusView>,
}

/// Per-VPN working / blocked votes
pub async fn status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<StatusResponse> {
    let feed = state.feeds.load_status().await;
    let isp = query.isp.as_deref();

    let vpns = aggregate_by_vpn(&feed.records, isp)
        .into_iter()
        .map(VpnStatusView::from)
        .collect();

    Json(StatusResponse {
        state: feed.state,
        isps: list_isps(&feed.records),
        selected_isp: isp
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(ALL_ISPS)
            .to_string(),
        vpns,
    })
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub state: LoadState,
    pub regions: &'static [&'static str],
    pub grid: RegionGrid,
}

/// ISP × protocol block grid for one region
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let region = query
        .region
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_REGION);

    if !REGIONS.contains(&region) {
        return Err(AppError::ValidationError(format!("Unknown region: {}", region)));
    }

    let feed = state.feeds.load_dashboard().await;

    Ok(Json(DashboardResponse {
        state: feed.state,
        regions: REGIONS,
        grid: region_grid(&feed.records, region),
    }))
}
