//! Risk Classifier
//!
//! Classification logic only - no types, no I/O.
//! Input: RiskSignals
//! Output: RiskVerdict

use super::context::RiskSignals;
use super::rules::{ClassificationTokens, CAUTION_ADVISORY, SAFE_ADVISORY, UNSAFE_ADVISORY};
use super::types::{RiskLevel, RiskReason, RiskVerdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify with the default tokens
pub fn classify(signals: &RiskSignals) -> RiskVerdict {
    classify_with_tokens(signals, &ClassificationTokens::default())
}

/// Classify with custom tokens.
///
/// Every rule is evaluated; the verdict is the most severe level any rule
/// raised. DNS leaks only count while nothing UNSAFE has fired, so they can
/// never soften an UNSAFE verdict.
pub fn classify_with_tokens(signals: &RiskSignals, tokens: &ClassificationTokens) -> RiskVerdict {
    let mut reasons = Vec::new();

    // 1. Encryption (only when reported)
    if let Some(encrypted) = signals.encrypted.as_deref() {
        if !encrypted.trim().is_empty() && !tokens.is_encrypted(encrypted) {
            reasons.push(RiskReason::NotEncrypted);
        }
    }

    // 2. IP leak (required column, anything but the clean token fails)
    if !tokens.is_no_leak(&signals.ip_leak) {
        reasons.push(RiskReason::IpLeak);
    }

    // 3. WebRTC leak
    if tokens.indicates_leak(&signals.webrtc_leak) {
        reasons.push(RiskReason::WebRtcLeak);
    }

    // 4. DNS leak
    if tokens.indicates_leak(&signals.dns_leak) && reasons.is_empty() {
        reasons.push(RiskReason::DnsLeak);
    }

    let level = reasons
        .iter()
        .map(RiskReason::severity)
        .max()
        .unwrap_or(RiskLevel::Safe);

    RiskVerdict {
        level,
        advisory: advisory_for(level, &reasons),
        reasons,
    }
}

/// Fixed template per tier
pub fn advisory_for(level: RiskLevel, reasons: &[RiskReason]) -> String {
    let joined = reasons
        .iter()
        .map(RiskReason::label)
        .collect::<Vec<_>>()
        .join(", ");

    match level {
        RiskLevel::Safe => SAFE_ADVISORY.to_string(),
        RiskLevel::Caution => CAUTION_ADVISORY.replace("{reasons}", &joined),
        RiskLevel::Unsafe => UNSAFE_ADVISORY.replace("{reasons}", &joined),
    }
}

// ============================================================================
// TESTS
// ============================================================================
