//! VPN Status Sheet
//!
//! Columns: `Timestamp | ISP | VPN Name | Protocol | Status`. The status
//! column is free Myanmar text from the form, matched by key phrases.

use serde::{Deserialize, Serialize};

use super::{required, FromRawRow};
use crate::constants::STATUS_HEADER_MARKERS;
use crate::logic::ingest::RawRow;

const COL_TIMESTAMP: usize = 0;
const COL_ISP: usize = 1;
const COL_VPN: usize = 2;
const COL_STATUS: usize = 4;

/// "Connection is good" / "works fine"
const OK_PHRASES: &[&str] = &["လိုင်းကောင်းသည်", "အဆင်ပြေ"];

/// "Doesn't work at all" / "doesn't work"
const BLOCKED_PHRASES: &[&str] = &["လုံးဝမရပါ", "မရပါ"];

/// Reported connection outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionStatus {
    Ok,
    Blocked,
    Unknown,
}

impl ConnectionStatus {
    /// Classify the free-text status cell
    pub fn from_text(text: &str) -> Self {
        if OK_PHRASES.iter().any(|p| text.contains(p)) {
            ConnectionStatus::Ok
        } else if BLOCKED_PHRASES.iter().any(|p| text.contains(p)) {
            ConnectionStatus::Blocked
        } else {
            ConnectionStatus::Unknown
        }
    }
}

/// One crowdsourced status report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub timestamp: String,
    pub isp: String,
    pub vpn_name: String,
    pub status: ConnectionStatus,
    pub raw_status: String,
}

impl FromRawRow for StatusReport {
    const MIN_COLUMNS: usize = COL_STATUS + 1;
    const HEADER_MARKERS: &'static [&'static str] = STATUS_HEADER_MARKERS;

    fn from_row(row: &RawRow) -> Option<Self> {
        let isp = required(row, COL_ISP)?;
        let vpn_name = required(row, COL_VPN)?;
        let raw_status = row.cell_or_empty(COL_STATUS).to_string();

        Some(Self {
            timestamp: row.cell_or_empty(COL_TIMESTAMP).to_string(),
            isp,
            vpn_name,
            status: ConnectionStatus::from_text(&raw_status),
            raw_status,
        })
    }
}
