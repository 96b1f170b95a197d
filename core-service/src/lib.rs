//! VPN Safety Guard - core library
//!
//! Turns crowdsourced spreadsheet exports into risk verdicts and status
//! views, and runs the live connectivity and leak checks.

pub mod constants;
pub mod logic;

pub use logic::feed::{FeedConfig, FeedOutcome, LoadState, SheetFeeds};
pub use logic::ingest::RawRow;
pub use logic::risk::{classify, RiskLevel, RiskVerdict};
pub use logic::visitors::VisitorStore;
