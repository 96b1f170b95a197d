//! Records Module - typed rows for each sheet
//!
//! Every sheet maps its data rows by fixed column index. Rows that are too
//! short or lack their identifying field are dropped without error.
//!
//! ## Sheets
//! - `app_test`: app encryption / leak test results
//! - `status_report`: "does VPN X work on ISP Y" reports
//! - `block_report`: blocked protocol reports by region and ISP

pub mod status_report;
pub mod block_report;


pub use app_test::AppTestEntry;
pub use status_report::{ConnectionStatus, StatusReport};
pub use block_report::BlockReport;

use crate::logic::ingest::{self, RawRow};

/// A record that can be built from one data row
pub trait FromRawRow: Sized {
    /// Rows with fewer cells are skipped
    const MIN_COLUMNS: usize;

    /// Header markers for the sheet this record comes from
    const HEADER_MARKERS: &'static [&'static str];

    /// Map a row that already has `MIN_COLUMNS` cells.
    /// `None` = row is missing its identifying field.
    fn from_row(row: &RawRow) -> Option<Self>;
}

/// Map data rows, dropping short or anonymous ones
pub fn map_rows<T: FromRawRow>(rows: &[RawRow]) -> Vec<T> {
    let records: Vec<T> = rows
        .iter()
        .filter(|row| row.len() >= T::MIN_COLUMNS)
        .filter_map(T::from_row)
        .collect();

    if records.len() < rows.len() {
        log::debug!("Dropped {} malformed rows", rows.len() - records.len());
    }
    records
}

/// Full pipeline: scan, skip preamble, map
pub fn parse_records<T: FromRawRow>(text: &str) -> Vec<T> {
    let rows = ingest::ingest(text, T::HEADER_MARKERS);
    map_rows(&rows)
}

/// Trimmed cell, `None` when blank
pub(crate) fn required(row: &RawRow, idx: usize) -> Option<String> {
    row.cell(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
