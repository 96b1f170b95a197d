//! Risk Signals
//!
//! The test outcomes a classification looks at, detached from whichever
//! sheet row they came from.

use serde::{Deserialize, Serialize};

/// Leak / encryption test outcomes for one app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSignals {
    /// Encryption test outcome; `None` or blank = not reported
    pub encrypted: Option<String>,
    /// IP leak outcome (required)
    pub ip_leak: String,
    /// WebRTC leak outcome; blank = not tested
    pub webrtc_leak: String,
    /// DNS leak outcome; blank = not tested
    pub dns_leak: String,
}

impl RiskSignals {
    pub fn new(ip_leak: &str) -> Self {
        Self {
            ip_leak: ip_leak.to_string(),
            ..Default::default()
        }
    }

    pub fn with_encrypted(mut self, encrypted: &str) -> Self {
        self.encrypted = Some(encrypted.to_string());
        self
    }

    pub fn with_webrtc_leak(mut self, outcome: &str) -> Self {
        self.webrtc_leak = outcome.to_string();
        self
    }

    pub fn with_dns_leak(mut self, outcome: &str) -> Self {
        self.dns_leak = outcome.to_string();
        self
    }
}
