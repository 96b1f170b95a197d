//! Risk Module
//!
//! Turns leak / encryption test outcomes into a SAFE / CAUTION / UNSAFE
//! verdict with advisory text.
//!
//! ## Structure
//! - `types`: Core types (RiskLevel, RiskReason, RiskVerdict)
//! - `context`: Signals a classification looks at
//! - `rules`: Tokens and advisory templates
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::risk::{classify, RiskSignals, RiskLevel};
//!
//! let verdict = classify(&signals);
//! match verdict.level {
//!     RiskLevel::Safe => println!("ok"),
//!     RiskLevel::Caution => println!("careful"),
//!     RiskLevel::Unsafe => println!("avoid"),
//! }
//! ```

pub mod types;
pub mod context;
pub mod rules;
pub mod classifier;

pub use types::{RiskLevel, RiskReason, RiskVerdict};

pub use context::RiskSignals;

pub use rules::{ClassificationTokens, ENCRYPTED_TOKEN, NO_LEAK_TOKEN};

pub use classifier::{advisory_for, classify, classify_with_tokens};
