//! Safety guide

use axum::Json;

use safety_guard_core::logic::knowledge::{safety_guide, SafetyGuide};

pub async fn get() -> Json<SafetyGuide> {
    Json(safety_guide())
}
