//! HTTP handlers

pub mod health;
pub mod auth;
pub mod report;
pub mod visitors;
pub mod apps;
pub mod protocols;
pub mod community;
pub mod connectivity;
pub mod leak;
pub mod ooni;
pub mod guide;

use axum::http::HeaderMap;

/// First `X-Forwarded-For` entry, if any
pub(crate) fn forwarded_for(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
}
