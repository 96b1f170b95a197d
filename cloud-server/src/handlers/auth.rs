//! Login / logout handlers

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{AppState, AppResult};
use crate::middleware::auth::{clear_session_cookie, issue_token, session_cookie};
use crate::models::{LoginRequest, LoginResponse};

/// Login endpoint. Sets the session cookie on success.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Response> {
    if !state.credentials.verify(&req.username, &req.password) {
        tracing::warn!("Failed login for '{}'", req.username);
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse { success: false }),
        ).into_response());
    }

    let max_age = state.config.session_max_age();
    let token = issue_token(&req.username, &state.config.session_secret, max_age)?;
    let cookie = session_cookie(&token, max_age, state.config.is_production());

    tracing::info!("User '{}' logged in", req.username);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse { success: true }),
    ).into_response())
}

/// Logout endpoint. Always succeeds.
pub async fn logout(State(state): State<AppState>) -> Response {
    (
        [(SET_COOKIE, clear_session_cookie(state.config.is_production()))],
        Json(LoginResponse { success: true }),
    ).into_response()
}
