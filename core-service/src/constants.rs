//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point a panel at a different spreadsheet, only edit this file
//! (or set the matching environment variable).

use std::time::Duration;

/// Published CSV export of the crowdsourced VPN status sheet
pub const DEFAULT_STATUS_CSV_URL: &str =
    "https://docs.google.com/spreadsheets/d/1oDxKmkdUahP_54_6hn1u_jB6Q7SN-zgXuI0pIHB5V3s/export?format=csv&gid=815136729";

/// Published CSV export of the community dashboard (block report) sheet
pub const DEFAULT_DASHBOARD_CSV_URL: &str =
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vSGUGlWVfSl_tGsOM1tynFzOHxGieJLRond6T3E4L0xOBS2TX3HFyEdX1fWNQBMpw6Ww5Jbl_alrJnw/pub?output=csv";

/// App test results sheet. Empty = static knowledge base only.
pub const DEFAULT_APPS_CSV_URL: &str = "";

/// Header markers for the app test sheet
pub const APPS_HEADER_MARKERS: &[&str] = &["Timestamp", "Encrypt"];

/// Header markers for the VPN status sheet (preceded by metadata rows)
pub const STATUS_HEADER_MARKERS: &[&str] = &["Timestamp", "VPN"];

/// Header markers for the dashboard sheet
pub const DASHBOARD_HEADER_MARKERS: &[&str] = &["Timestamp"];

/// Per-probe timeout for the censorship check
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for outbound HTTP calls (sheets, IP lookups, OONI)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Country code used for the OONI overview
pub const DEFAULT_OONI_COUNTRY: &str = "MM";

/// OONI country overview endpoint
pub const OONI_OVERVIEW_URL: &str = "https://api.ooni.io/api/_/country_overview";

/// Primary IP geolocation provider
pub const PRIMARY_IP_API: &str = "https://ipapi.co";

/// Fallback IP geolocation provider
pub const FALLBACK_IP_API: &str = "https://ipwho.is";

/// Reports the DNS resolver that answered the lookup
pub const DNS_RESOLVER_API: &str = "https://edns.ip-api.com/json";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "VPN Safety Guard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the status sheet URL from environment or use default
pub fn get_status_csv_url() -> String {
    std::env::var("STATUS_CSV_URL")
        .unwrap_or_else(|_| DEFAULT_STATUS_CSV_URL.to_string())
}

/// Get the dashboard sheet URL from environment or use default
pub fn get_dashboard_csv_url() -> String {
    std::env::var("DASHBOARD_CSV_URL")
        .unwrap_or_else(|_| DEFAULT_DASHBOARD_CSV_URL.to_string())
}

/// Get the app test sheet URL from environment or use default
pub fn get_apps_csv_url() -> String {
    std::env::var("APPS_CSV_URL")
        .unwrap_or_else(|_| DEFAULT_APPS_CSV_URL.to_string())
}

/// Get probe timeout from environment or use default
pub fn get_probe_timeout() -> Duration {
    std::env::var("PROBE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(PROBE_TIMEOUT)
}

/// Get outbound HTTP timeout from environment or use default
pub fn get_http_timeout_secs() -> u64 {
    std::env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
}

/// Get OONI country code from environment or use default
pub fn get_ooni_country() -> String {
    std::env::var("OONI_COUNTRY")
        .unwrap_or_else(|_| DEFAULT_OONI_COUNTRY.to_string())
}
