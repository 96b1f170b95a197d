//! Risk Types
//!
//! Core types for risk classification.
//! Data structures only, no logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk tiers, ordered by severity (`Safe < Caution < Unsafe`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Passed every check
    Safe,
    /// Usable, but something needs attention
    Caution,
    /// Exposes the user
    Unsafe,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Caution => "CAUTION",
            RiskLevel::Unsafe => "UNSAFE",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Safe => 0,
            RiskLevel::Caution => 1,
            RiskLevel::Unsafe => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "#16a34a",    // Green
            RiskLevel::Caution => "#eab308", // Yellow
            RiskLevel::Unsafe => "#ef4444",  // Red
        }
    }

    /// Parse a sheet/knowledge-base label ("safe", "Caution", "UNSAFE")
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "SAFE" => Some(RiskLevel::Safe),
            "CAUTION" => Some(RiskLevel::Caution),
            "UNSAFE" => Some(RiskLevel::Unsafe),
            _ => None,
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Safe
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK REASON
// ============================================================================

/// A single failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskReason {
    NotEncrypted,
    IpLeak,
    WebRtcLeak,
    DnsLeak,
}

impl RiskReason {
    pub fn label(&self) -> &'static str {
        match self {
            RiskReason::NotEncrypted => "Not Encrypted",
            RiskReason::IpLeak => "IP Leaks",
            RiskReason::WebRtcLeak => "WebRTC Leaks",
            RiskReason::DnsLeak => "DNS Leaks",
        }
    }

    /// Severity this reason contributes on its own
    pub fn severity(&self) -> RiskLevel {
        match self {
            RiskReason::DnsLeak => RiskLevel::Caution,
            _ => RiskLevel::Unsafe,
        }
    }
}

impl std::fmt::Display for RiskReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// RISK VERDICT
// ============================================================================

/// Result of classifying one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub level: RiskLevel,
    /// Failed checks, in rule order
    pub reasons: Vec<RiskReason>,
    /// Human-readable advice for the tier
    pub advisory: String,
}

impl RiskVerdict {
    pub fn is_safe(&self) -> bool {
        self.level == RiskLevel::Safe
    }

    pub fn reason_labels(&self) -> Vec<&'static str> {
        self.reasons.iter().map(RiskReason::label).collect()
    }
}

impl Default for RiskVerdict {
    fn default() -> Self {
        Self {
            level: RiskLevel::Safe,
            reasons: vec![],
            advisory: String::new(),
        }
    }
}
