//! Configuration module

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use safety_guard_core::constants;
use safety_guard_core::logic::probe::{default_targets, ProbeTarget};
use safety_guard_core::FeedConfig;

/// Form endpoint that collects block reports
pub const DEFAULT_REPORT_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfljCctg9O0D0PNF2ts_Obk7QnXkyCTc9F6qU91diTwSK0cig/formResponse";

/// Default session lifetime (one week)
pub const DEFAULT_SESSION_HOURS: u64 = 24 * 7;

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_HOURS: u64 = 24 * 365;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Accepted `(username, password)` pairs
    pub credentials: Vec<(String, String)>,

    /// Session token signing key
    pub session_secret: String,

    /// Session lifetime in hours
    pub session_hours: u64,

    /// Sheet URLs for the live panels
    pub feeds: FeedConfig,

    /// Where block reports are forwarded
    pub report_form_url: String,

    /// Visitor counter JSON file
    pub visitor_data_file: PathBuf,

    /// Per-probe timeout for the censorship check
    pub probe_timeout: Duration,

    /// Sites the censorship check probes
    pub probe_targets: Vec<ProbeTarget>,

    /// Country for the OONI overview
    pub ooni_country: String,

    /// OONI country overview endpoint
    pub ooni_overview_url: String,

    /// IP geolocation providers, primary then fallback
    pub ip_primary_url: String,
    pub ip_fallback_url: String,

    /// DNS resolver check; empty disables it
    pub dns_resolver_url: String,

    /// Timeout for every outbound request
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            credentials: load_credentials(),

            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "safety-guard-session-secret-change-in-production".to_string()),

            session_hours: parse_session_hours(env::var("SESSION_HOURS").ok().as_deref()),

            feeds: FeedConfig::default(),

            report_form_url: env::var("REPORT_FORM_URL")
                .unwrap_or_else(|_| DEFAULT_REPORT_FORM_URL.to_string()),

            visitor_data_file: env::var("VISITOR_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/visitors.json")),

            probe_timeout: constants::get_probe_timeout(),

            probe_targets: default_targets(),

            ooni_country: constants::get_ooni_country(),

            ooni_overview_url: constants::OONI_OVERVIEW_URL.to_string(),

            ip_primary_url: constants::PRIMARY_IP_API.to_string(),
            ip_fallback_url: constants::FALLBACK_IP_API.to_string(),

            dns_resolver_url: constants::DNS_RESOLVER_API.to_string(),

            http_timeout_secs: constants::get_http_timeout_secs(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Session lifetime in seconds, also used as the cookie Max-Age
    pub fn session_max_age(&self) -> u64 {
        self.session_hours.min(MAX_SESSION_HOURS).saturating_mul(3600)
    }
}

/// Session hours from `SESSION_HOURS`, clamped to `1..=MAX_SESSION_HOURS`
pub fn parse_session_hours(value: Option<&str>) -> u64 {
    value
        .and_then(|h| h.trim().parse::<u64>().ok())
        .map(|h| h.clamp(1, MAX_SESSION_HOURS))
        .unwrap_or(DEFAULT_SESSION_HOURS)
}

/// `AUTH_USERS=user:pass,user2:pass2` wins over `AUTH_USER`/`AUTH_PASS`
fn load_credentials() -> Vec<(String, String)> {
    if let Ok(list) = env::var("AUTH_USERS") {
        let parsed = parse_user_list(&list);
        if !parsed.is_empty() {
            return parsed;
        }
        tracing::warn!("AUTH_USERS is set but has no valid entries, using AUTH_USER/AUTH_PASS");
    }

    let user = env::var("AUTH_USER").unwrap_or_else(|_| "admin".to_string());
    let pass = env::var("AUTH_PASS").unwrap_or_else(|_| "password123".to_string());
    vec![(user, pass)]
}

pub fn parse_user_list(list: &str) -> Vec<(String, String)> {
    list.split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(user, pass)| (user.trim().to_string(), pass.to_string()))
        .filter(|(user, pass)| !user.is_empty() && !pass.is_empty())
        .collect()
}
