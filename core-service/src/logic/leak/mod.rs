//! Leak Module - IP and WebRTC exposure checks

pub mod webrtc;
pub mod ip_info;

pub use webrtc::{assess_webrtc, collect_ips, extract_ip, WebRtcStatus, WebRtcVerdict};
pub use ip_info::{DnsResolver, IpInfo, IpLookup, LookupError, LOOKUP_FAILED_MESSAGE};
