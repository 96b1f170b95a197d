//! IP info and WebRTC leak handlers

use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;
use validator::Validate;

use safety_guard_core::logic::leak::{assess_webrtc, IpInfo, WebRtcVerdict};

use crate::{AppState, AppResult};
use super::forwarded_for;

/// Geolocate the caller. Without a forwarded address the server's own
/// egress IP is looked up.
pub async fn ip_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<IpInfo>> {
    let ip = forwarded_for(&headers)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    Ok(Json(state.ip_lookup.lookup(ip).await?))
}

#[derive(Debug, Deserialize, Validate)]
pub struct LeakCheckRequest {
    /// ICE candidate lines gathered by the browser
    #[validate(length(max = 64))]
    pub candidates: Vec<String>,
    pub public_ip: Option<String>,
}

pub async fn leak_check(Json(req): Json<LeakCheckRequest>) -> AppResult<Json<WebRtcVerdict>> {
    req.validate()?;
    Ok(Json(assess_webrtc(&req.candidates, req.public_ip.as_deref())))
}
