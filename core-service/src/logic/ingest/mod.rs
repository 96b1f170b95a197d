//! Ingest Module - CSV text to raw rows
//!
//! ## Structure
//! - `scanner`: state-machine CSV scanner
//! - `header`: header / preamble detection
//!
//! ## Usage
//! ```ignore
//! use crate::logic::ingest;
//!
//! let data_rows = ingest::ingest(&csv_text, &["Timestamp", "VPN"]);
//! ```

pub mod scanner;
pub mod header;


use serde::Serialize;

pub use scanner::{scan, CsvScanner};
pub use header::{find_header, skip_preamble};

// ============================================================================
// RAW ROW
// ============================================================================

/// One logical CSV record, before field-name mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRow {
    cells: Vec<String>,
}

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `idx`, if the row is long enough
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(String::as_str)
    }

    /// Cell at `idx`, or "" when missing
    pub fn cell_or_empty(&self, idx: usize) -> &str {
        self.cell(idx).unwrap_or("")
    }

    /// All cells joined with the delimiter (used for header matching)
    pub fn joined(&self) -> String {
        self.cells.join(",")
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

impl From<Vec<String>> for RawRow {
    fn from(cells: Vec<String>) -> Self {
        Self::new(cells)
    }
}

impl From<Vec<&str>> for RawRow {
    fn from(cells: Vec<&str>) -> Self {
        Self::new(cells.into_iter().map(str::to_string).collect())
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Scan `text` and return only the data rows below the header
pub fn ingest(text: &str, markers: &[&str]) -> Vec<RawRow> {
    let rows = scan(text);
    let total = rows.len();
    let data = skip_preamble(rows, markers);
    log::debug!("Ingested {} data rows ({} scanned)", data.len(), total);
    data
}
