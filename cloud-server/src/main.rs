//! VPN Safety Guard API Server
//!
//! Serves the community VPN safety panels over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SAFETY GUARD SERVER                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Session  │  │  Live Checks            │ │
//! │  │  (Axum)   │  │  Cookie   │  │  (probes, IP, OONI)     │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │      ┌──────────────────────────────────────┐              │
//! │      │ safety-guard-core (sheets → verdicts) │              │
//! │      └──────────────────────────────────────┘              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;
mod models;
mod handlers;
mod middleware;
mod error;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safety_guard_core::logic::leak::IpLookup;
use safety_guard_core::{SheetFeeds, VisitorStore};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "safety_guard_server=debug,safety_guard_core=info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("{} server starting...", safety_guard_core::constants::APP_NAME);
    tracing::info!("Environment: {}", config.environment);

    let state = AppState::new(config.clone())?;
    tracing::info!("Accepting {} login(s)", state.credentials.user_count());
    tracing::info!("Visitor data: {}", state.visitors.path().display());

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub credentials: Arc<store::CredentialStore>,
    pub http: reqwest::Client,
    pub feeds: SheetFeeds,
    pub visitors: Arc<VisitorStore>,
    pub ip_lookup: IpLookup,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(concat!("safety-guard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        let credentials = store::CredentialStore::new(&config.credentials)
            .map_err(|e| anyhow::anyhow!("failed to hash credentials: {}", e))?;
        let ip_lookup = IpLookup::with_providers(
            http.clone(),
            &config.ip_primary_url,
            &config.ip_fallback_url,
        )
        .with_dns_url(&config.dns_resolver_url);

        Ok(Self {
            credentials: Arc::new(credentials),
            feeds: SheetFeeds::new(http.clone(), &config.feeds),
            visitors: Arc::new(VisitorStore::new(config.visitor_data_file.clone())),
            ip_lookup,
            http,
            config,
        })
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .route("/api/report", post(handlers::report::submit))
        .route(
            "/api/visitor-count",
            get(handlers::visitors::count).post(handlers::visitors::record),
        );

    // Data routes (session cookie required)
    let session_routes = Router::new()
        // Knowledge base
        .route("/api/v1/apps", get(handlers::apps::search))
        .route("/api/v1/protocols", get(handlers::protocols::list))
        .route("/api/v1/protocols/:key", get(handlers::protocols::get))
        .route("/api/v1/guide", get(handlers::guide::get))

        // Community sheets
        .route("/api/v1/community/status", get(handlers::community::status))
        .route("/api/v1/community/dashboard", get(handlers::community::dashboard))

        // Live checks
        .route("/api/v1/censorship-check", post(handlers::connectivity::censorship_check))
        .route("/api/v1/ooni", get(handlers::ooni::overview))
        .route("/api/v1/ip-info", get(handlers::leak::ip_info))
        .route("/api/v1/leak-check", post(handlers::leak::leak_check))

        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
