//! Block Report Sheet (community dashboard)
//!
//! Columns: `Timestamp | Protocol | Region | ISP | Internet Type`.

use serde::{Deserialize, Serialize};

use super::{required, FromRawRow};
use crate::constants::DASHBOARD_HEADER_MARKERS;
use crate::logic::ingest::RawRow;

/// One "this protocol is blocked here" report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReport {
    pub timestamp: String,
    pub protocol: String,
    pub region: String,
    pub isp: String,
    /// Mobile / fiber / broadband; optional column
    pub internet_type: Option<String>,
}

impl FromRawRow for BlockReport {
    const MIN_COLUMNS: usize = 4;
    const HEADER_MARKERS: &'static [&'static str] = DASHBOARD_HEADER_MARKERS;

    fn from_row(row: &RawRow) -> Option<Self> {
        Some(Self {
            timestamp: row.cell_or_empty(0).to_string(),
            protocol: required(row, 1)?,
            region: required(row, 2)?,
            isp: required(row, 3)?,
            internet_type: required(row, 4),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internet_type_optional() {
        let row = RawRow::from(vec!["t", "WireGuard", "Yangon", "Mytel"]);
        let report = BlockReport::from_row(&row).unwrap();
        assert_eq!(report.internet_type, None);

        let row = RawRow::from(vec!["t", "WireGuard", "Yangon", "Mytel", "Mobile Data"]);
        assert_eq!(
            BlockReport::from_row(&row).unwrap().internet_type.as_deref(),
            Some("Mobile Data")
        );
    }

    #[test]
    fn test_missing_region_rejected() {
        let row = RawRow::from(vec!["t", "WireGuard", "", "Mytel"]);
        assert!(BlockReport::from_row(&row).is_none());
    }
}
