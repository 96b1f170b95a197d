//! Session model

use serde::{Deserialize, Serialize};

/// Signed into the `auth_token` cookie
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,      // Username
    pub exp: usize,       // Expiration timestamp
    pub iat: usize,       // Issued at
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}
