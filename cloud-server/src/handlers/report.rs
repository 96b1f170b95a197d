//! Block report forwarding

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::models::{ReportRequest, ReportResponse};

/// Forward a block report to the collection form
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> AppResult<Response> {
    req.validate()?;

    let result = state.http
        .post(&state.config.report_form_url)
        .form(&req.form_fields())
        .send()
        .await;

    let response = match result {
        Ok(upstream) if upstream.status().is_success() => {
            tracing::info!("Report submitted: {} / {} / {}", req.protocol, req.region, req.isp);
            Json(ReportResponse { success: true, error: None }).into_response()
        }
        Ok(upstream) => {
            tracing::error!("Form submission failed: {}", upstream.status());
            failure("Submission failed")
        }
        Err(e) => {
            tracing::error!("Error submitting report: {}", e);
            failure("Internal Server Error")
        }
    };

    Ok(response)
}

fn failure(error: &'static str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ReportResponse { success: false, error: Some(error) }),
    ).into_response()
}
