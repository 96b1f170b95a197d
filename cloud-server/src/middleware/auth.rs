//! Session middleware
//!
//! The login handler sets an `auth_token` cookie holding a signed JWT.
//! Data routes require that cookie to decode and be unexpired.

use axum::{
    extract::{State, Request},
    middleware::Next,
    response::Response,
    http::{header::COOKIE, HeaderMap},
};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{AppState, AppError, AppResult};
use crate::models::SessionClaims;

pub const SESSION_COOKIE: &str = "auth_token";

/// Session extracted from the cookie
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub username: String,
}

/// Sign a session token for `username`
pub fn issue_token(username: &str, secret: &str, lifetime_secs: u64) -> AppResult<String> {
    let now = Utc::now();
    let exp = i64::try_from(lifetime_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| AppError::InternalError("session lifetime out of range".to_string()))?;

    let claims = SessionClaims {
        sub: username.to_string(),
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes())
    ).map_err(|e| AppError::InternalError(e.to_string()))
}

/// `Set-Cookie` value carrying a session token
pub fn session_cookie(token: &str, max_age: u64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE, token, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Value of cookie `name` across all `Cookie` headers
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Middleware: Require a valid session cookie
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = cookie_value(req.headers(), SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

    let token_data = decode::<SessionClaims>(
        &token,
        &DecodingKey::from_secret(state.config.session_secret.as_bytes()),
        &Validation::default()
    )?;

    req.extensions_mut().insert(SessionContext {
        username: token_data.claims.sub,
    });

    Ok(next.run(req).await)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions
            .get::<SessionContext>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
