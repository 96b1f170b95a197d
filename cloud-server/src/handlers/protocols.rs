//! Protocol risk table

use axum::{extract::Path, Json};

use safety_guard_core::logic::knowledge::{find_protocol, ProtocolInfo, PROTOCOLS};

use crate::{AppError, AppResult};

pub async fn list() -> Json<&'static [ProtocolInfo]> {
    Json(PROTOCOLS)
}

pub async fn get(Path(key): Path<String>) -> AppResult<Json<&'static ProtocolInfo>> {
    find_protocol(&key)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown protocol: {}", key)))
}
