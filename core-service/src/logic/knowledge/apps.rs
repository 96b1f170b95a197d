//! App Knowledge Base
//!
//! Curated verdicts for well-known VPN apps, merged with community test
//! results from the app sheet. Curated entries always win by name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::logic::records::AppTestEntry;
use crate::logic::risk::{RiskLevel, RiskReason};

// ============================================================================
// TYPES
// ============================================================================

/// Where an assessment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// Hand-written knowledge base
    Curated,
    /// Classified from the community test sheet
    Community,
}

/// One app as shown in the integrity lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppAssessment {
    pub name: String,
    pub risk: RiskLevel,
    pub protocol: String,
    pub advice: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub reasons: Vec<RiskReason>,
    pub source: EntrySource,
}

impl AppAssessment {
    /// Classify a community test row
    pub fn from_test(entry: &AppTestEntry) -> Self {
        let verdict = entry.verdict();
        Self {
            name: entry.name.clone(),
            risk: verdict.level,
            protocol: entry.protocol.clone(),
            advice: verdict.advisory,
            reasons: verdict.reasons,
            source: EntrySource::Community,
        }
    }

    fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Lookup outcome for a search box query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppLookup {
    /// Nothing typed yet
    Empty,
    Matches { apps: Vec<AppAssessment> },
    /// Not in any list: treat as UNSAFE until verified
    Unknown { risk: RiskLevel, advice: String },
}

pub const UNKNOWN_APP_ADVICE: &str =
    "Unknown App. If it's not on our list, treat it as UNSAFE until verified.";

// ============================================================================
// CURATED DATA
// ============================================================================

struct CuratedApp {
    name: &'static str,
    risk: RiskLevel,
    protocol: &'static str,
    advice: &'static str,
}

const CURATED_APPS: &[CuratedApp] = &[
    // Safe / Recommended
    CuratedApp {
        name: "Mullvad VPN",
        risk: RiskLevel::Safe,
        protocol: "WireGuard / OpenVPN (Bridge)",
        advice: "Cyber Guardian says: ✅ Excellent choice! No logs, anonymous account numbers. Very safe.",
    },
    CuratedApp {
        name: "Proton VPN",
        risk: RiskLevel::Safe,
        protocol: "Stealth / WireGuard",
        advice: "Cyber Guardian says: ✅ Trusted Swiss privacy. Use the \"Stealth\" protocol setting to bypass blocking.",
    },
    CuratedApp {
        name: "Outline",
        risk: RiskLevel::Safe,
        protocol: "Shadowsocks",
        advice: "Cyber Guardian says: ✅ Highly recommended. You control the server. Very hard for the junta to detect.",
    },
    CuratedApp {
        name: "Amnezia VPN",
        risk: RiskLevel::Safe,
        protocol: "AmneziaWG / X-Ray",
        advice: "Cyber Guardian says: ✅ Designed for censorship resistance. Excellent for hosting your own server.",
    },
    CuratedApp {
        name: "V2Box",
        risk: RiskLevel::Safe,
        protocol: "V2Ray Client",
        advice: "Cyber Guardian says: ✅ Great client for V2Ray. Safe if you use a good server config (VMess/VLESS).",
    },
    // Caution / Medium
    CuratedApp {
        name: "ExpressVPN",
        risk: RiskLevel::Caution,
        protocol: "Lightway (Obfuscated)",
        advice: "Cyber Guardian says: ⚠️ Good security, but a high-profile target. If it connects, it is safe, but it is often blocked.",
    },
    CuratedApp {
        name: "Psiphon",
        risk: RiskLevel::Caution,
        protocol: "SSH / Obfuscation",
        advice: "Cyber Guardian says: ⚠️ Good for emergencies, but they log some data and it can be slow. Use only if others fail.",
    },
    CuratedApp {
        name: "Wire",
        risk: RiskLevel::Caution,
        protocol: "WireGuard",
        advice: "Cyber Guardian says: ⚠️ WireGuard is fast but easily detected. Use only if you are sure it is not being blocked.",
    },
    // Unsafe / High Risk (Free/Ad-heavy/Logging)
    CuratedApp {
        name: "Turbo VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Unknown / IKEv2",
        advice: "Cyber Guardian says: ❌ AVOID. Known for logging user data and showing ads. Not safe for sensitive activities.",
    },
    CuratedApp {
        name: "Super VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Unknown",
        advice: "Cyber Guardian says: ❌ DANGEROUS. History of data leaks and malware. Do not use.",
    },
    CuratedApp {
        name: "Thunder VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Unknown",
        advice: "Cyber Guardian says: ❌ High Risk. Free VPNs sell your data. Not resistant to DPI.",
    },
    CuratedApp {
        name: "Hula VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Unknown",
        advice: "Cyber Guardian says: ❌ Be careful. Free services often log your IP. Use a trusted paid or open-source alternative.",
    },
    CuratedApp {
        name: "Jump Jump VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Unknown",
        advice: "Cyber Guardian says: ❌ Unknown security. Likely logs data. Better to use Outline or Proton.",
    },
    CuratedApp {
        name: "X-VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Proprietary",
        advice: "Cyber Guardian says: ⚠️ Hit or miss. Free version is not private. Paid version is okay but there are better options.",
    },
    CuratedApp {
        name: "Now VPN",
        risk: RiskLevel::Unsafe,
        protocol: "Unknown",
        advice: "Cyber Guardian says: ❌ Generic free VPN. High risk of logging and tracking.",
    },
];

/// The curated knowledge base, in display order
pub fn curated_apps() -> Vec<AppAssessment> {
    CURATED_APPS
        .iter()
        .map(|app| AppAssessment {
            name: app.name.to_string(),
            risk: app.risk,
            protocol: app.protocol.to_string(),
            advice: app.advice.to_string(),
            reasons: vec![],
            source: EntrySource::Curated,
        })
        .collect()
}

// ============================================================================
// MERGE & SEARCH
// ============================================================================

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Two-source merge.
///
/// Every static entry is kept in order. Live entries are appended in source
/// order unless their name (case-insensitive) is already taken, by a static
/// entry or by an earlier live entry.
pub fn merge_apps(static_entries: Vec<AppAssessment>, live: Vec<AppAssessment>) -> Vec<AppAssessment> {
    let mut seen: HashSet<String> = static_entries.iter().map(AppAssessment::key).collect();
    let mut merged = static_entries;

    for entry in live {
        if seen.insert(entry.key()) {
            merged.push(entry);
        }
    }
    merged
}

/// Classify community rows and merge them under the curated list
pub fn build_catalog(tests: &[AppTestEntry]) -> Vec<AppAssessment> {
    let live = tests.iter().map(AppAssessment::from_test).collect();
    merge_apps(curated_apps(), live)
}

/// Case-insensitive substring search over a catalog
pub fn search_apps(catalog: &[AppAssessment], query: &str) -> AppLookup {
    let needle = normalize_name(query);
    if needle.is_empty() {
        return AppLookup::Empty;
    }

    let apps: Vec<AppAssessment> = catalog
        .iter()
        .filter(|app| app.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if apps.is_empty() {
        AppLookup::Unknown {
            risk: RiskLevel::Unsafe,
            advice: UNKNOWN_APP_ADVICE.to_string(),
        }
    } else {
        AppLookup::Matches { apps }
    }
}

// ============================================================================
// TESTS
// ============================================================================
