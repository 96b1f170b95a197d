//! Risk Classification Rules & Tokens
//!
//! Expected cell values and advisory templates.
//! No classification logic here, only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// TOKENS (what a passing cell looks like)
// ============================================================================

/// Value of the encryption column when traffic is encrypted
pub const ENCRYPTED_TOKEN: &str = "Encrypted";

/// Value of a leak column when the test found nothing
pub const NO_LEAK_TOKEN: &str = "No Leaks";

// ============================================================================
// ADVISORY TEMPLATES
// ============================================================================

/// SAFE tier advice
pub const SAFE_ADVISORY: &str =
    "Cyber Guardian says: ✅ Passed encryption and leak tests. Safe to use.";

/// CAUTION tier advice, `{reasons}` is replaced by the reason list
pub const CAUTION_ADVISORY: &str =
    "Cyber Guardian says: ⚠️ Use with caution: {reasons}. Switch to a trusted DNS resolver or enable DNS leak protection.";

/// UNSAFE tier advice, `{reasons}` is replaced by the reason list
pub const UNSAFE_ADVISORY: &str =
    "Cyber Guardian says: ❌ AVOID: {reasons}. Your real identity may be exposed.";

// ============================================================================
// CONFIGURABLE TOKENS
// ============================================================================

/// Tokens the classifier compares against (configurable per sheet)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationTokens {
    pub encrypted: String,
    pub no_leak: String,
}

impl Default for ClassificationTokens {
    fn default() -> Self {
        Self {
            encrypted: ENCRYPTED_TOKEN.to_string(),
            no_leak: NO_LEAK_TOKEN.to_string(),
        }
    }
}

impl ClassificationTokens {
    /// Trimmed, ASCII case-insensitive comparison
    pub fn matches(value: &str, token: &str) -> bool {
        value.trim().eq_ignore_ascii_case(token.trim())
    }

    pub fn is_encrypted(&self, value: &str) -> bool {
        Self::matches(value, &self.encrypted)
    }

    pub fn is_no_leak(&self, value: &str) -> bool {
        Self::matches(value, &self.no_leak)
    }

    /// Non-blank and not the "no leak" token
    pub fn indicates_leak(&self, value: &str) -> bool {
        !value.trim().is_empty() && !self.is_no_leak(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matching_ignores_case_and_padding() {
        let tokens = ClassificationTokens::default();
        assert!(tokens.is_encrypted("  encrypted "));
        assert!(!tokens.is_encrypted("Not Encrypted"));
        assert!(tokens.is_no_leak("NO LEAKS"));
    }

    #[test]
    fn test_blank_is_not_a_leak() {
        let tokens = ClassificationTokens::default();
        assert!(!tokens.indicates_leak(""));
        assert!(!tokens.indicates_leak("No Leaks"));
        assert!(tokens.indicates_leak("Leak Detected"));
    }
}
