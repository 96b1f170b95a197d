//! WebRTC leak assessment
//!
//! The browser gathers ICE candidates and submits them; we pull one IP out
//! of each candidate line and compare the set with the public IP.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static IP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,3}(\.[0-9]{1,3}){3}|[a-f0-9]{1,4}(:[a-f0-9]{1,4}){7})")
        .expect("IP pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebRtcStatus {
    /// WebRTC exposed no addresses
    None,
    /// Only the public (VPN) address is visible
    Exposed,
    /// An address other than the public one is visible
    Leak,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebRtcVerdict {
    pub status: WebRtcStatus,
    pub ips: Vec<String>,
    pub message: &'static str,
}

/// First IP found in a candidate line
pub fn extract_ip(candidate: &str) -> Option<&str> {
    IP_PATTERN.find(candidate).map(|m| m.as_str())
}

/// Unique IPs across all candidates, first-seen order
pub fn collect_ips<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    let mut ips: Vec<String> = Vec::new();
    for ip in candidates.iter().filter_map(|c| extract_ip(c.as_ref())) {
        if !ips.iter().any(|seen| seen == ip) {
            ips.push(ip.to_string());
        }
    }
    ips
}

/// Without a known `public_ip` nothing can match, so any exposed address is a leak.
pub fn assess_webrtc<S: AsRef<str>>(candidates: &[S], public_ip: Option<&str>) -> WebRtcVerdict {
    let ips = collect_ips(candidates);

    let status = if ips.is_empty() {
        WebRtcStatus::None
    } else {
        match public_ip.map(str::trim) {
            Some(public) if ips.iter().any(|ip| ip == public) => WebRtcStatus::Exposed,
            _ => WebRtcStatus::Leak,
        }
    };

    let message = match status {
        WebRtcStatus::None => "No WebRTC leaks detected.",
        WebRtcStatus::Exposed => {
            "WebRTC is active but exposing the same IP as your VPN. This is usually safe \
but disabling WebRTC is recommended for maximum privacy."
        }
        WebRtcStatus::Leak => {
            "WebRTC is exposing IPs different from your main connection. Disable WebRTC \
in your browser settings."
        }
    };

    WebRtcVerdict { status, ips, message }
}
