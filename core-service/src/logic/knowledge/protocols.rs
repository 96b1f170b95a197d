//! Protocol Risk Table
//!
//! How detectable each VPN protocol is under deep packet inspection.

use serde::Serialize;

/// Detection risk of a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProtocolRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub risk: ProtocolRisk,
    pub description: &'static str,
    pub recommendation: &'static str,
}

pub const PROTOCOLS: &[ProtocolInfo] = &[
    ProtocolInfo {
        key: "openvpn",
        name: "OpenVPN (Standard)",
        risk: ProtocolRisk::High,
        description: "Standard OpenVPN is easily detected by Deep Packet Inspection (DPI). The military junta can likely see you are using a VPN and block the connection.",
        recommendation: "Avoid using standard OpenVPN. Use with \"Obfuscation\" or \"Scramble\" plugins if available, or switch to V2Ray/Shadowsocks.",
    },
    ProtocolInfo {
        key: "wireguard",
        name: "WireGuard",
        risk: ProtocolRisk::Medium,
        description: "WireGuard is faster and more secure than OpenVPN, but it has a distinct fingerprint that can be detected and blocked by advanced firewalls.",
        recommendation: "Good for speed, but if you face blocking, switch to an obfuscated protocol like V2Ray or Shadowsocks.",
    },
    ProtocolInfo {
        key: "shadowsocks",
        name: "Shadowsocks",
        risk: ProtocolRisk::Low,
        description: "Designed specifically to bypass censorship. It looks like normal HTTPS traffic to firewalls, making it very hard to detect.",
        recommendation: "Highly recommended for Myanmar. Use with a reputable provider.",
    },
    ProtocolInfo {
        key: "v2ray",
        name: "V2Ray / VMess / VLESS",
        risk: ProtocolRisk::Low,
        description: "Advanced obfuscation protocol. Can mimic web browsing traffic perfectly (Reality/Vision), making it extremely difficult for the junta to detect.",
        recommendation: "The Gold Standard for bypassing censorship. Use \"Reality\" or \"Vision\" variants for best results.",
    },
    ProtocolInfo {
        key: "ikev2",
        name: "IKEv2 / IPSec",
        risk: ProtocolRisk::High,
        description: "Older standard protocol. Easily detected and often blocked by default on mobile networks.",
        recommendation: "Not recommended for high-censorship environments.",
    },
    ProtocolInfo {
        key: "tor",
        name: "Tor (The Onion Router)",
        risk: ProtocolRisk::Medium,
        description: "Provides high anonymity but is very slow. Tor bridges can bypass censorship, but standard Tor nodes are public and easily blocked.",
        recommendation: "Use only with \"Bridges\" (Snowflake/Obfs4) for bypassing blocking. Good for browsing, bad for streaming.",
    },
];

/// Look up by key ("wireguard"), case-insensitive
pub fn find_protocol(key: &str) -> Option<&'static ProtocolInfo> {
    let key = key.trim();
    PROTOCOLS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}
