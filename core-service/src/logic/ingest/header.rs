//! Header / Preamble Detection
//!
//! Published sheets sometimes carry title or note rows above the real
//! header. The header is the first row containing every marker; all rows
//! before it are dropped.

use super::RawRow;

/// Index of the first row whose joined text contains all markers.
///
/// An empty marker list matches the very first row.
pub fn find_header(rows: &[RawRow], markers: &[&str]) -> Option<usize> {
    rows.iter().position(|row| {
        let text = row.joined();
        markers.iter().all(|m| text.contains(m))
    })
}

/// Drop preamble and header, keep data rows.
///
/// No header = empty data set (not an error).
pub fn skip_preamble(mut rows: Vec<RawRow>, markers: &[&str]) -> Vec<RawRow> {
    match find_header(&rows, markers) {
        Some(idx) => rows.split_off(idx + 1),
        None => {
            log::debug!("No header row matching {:?} in {} rows", markers, rows.len());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        RawRow::from(cells.to_vec())
    }

    #[test]
    fn test_header_after_preamble() {
        let rows = vec![
            row(&["VPN Status Survey"]),
            row(&["Updated daily", ""]),
            row(&["Timestamp", "ISP", "VPN Name", "Protocol", "Status"]),
            row(&["t1", "MPT", "Proton", "WG", "ok"]),
        ];
        assert_eq!(find_header(&rows, &["Timestamp", "VPN"]), Some(2));

        let data = skip_preamble(rows, &["Timestamp", "VPN"]);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].cell(1), Some("MPT"));
    }

    #[test]
    fn test_all_markers_required_in_same_row() {
        let rows = vec![
            row(&["Timestamp only"]),
            row(&["VPN only"]),
            row(&["x"]),
        ];
        assert_eq!(find_header(&rows, &["Timestamp", "VPN"]), None);
        assert!(skip_preamble(rows, &["Timestamp", "VPN"]).is_empty());
    }

    #[test]
    fn test_empty_markers_take_first_row() {
        let rows = vec![row(&["h"]), row(&["d1"]), row(&["d2"])];
        assert_eq!(skip_preamble(rows, &[]).len(), 2);
    }

    #[test]
    fn test_bilingual_header() {
        let rows = vec![
            row(&["Timestamp", "ISP (အင်တာနက်)", "VPN အမည်"]),
            row(&["t", "Mytel", "Outline"]),
        ];
        assert_eq!(find_header(&rows, &["Timestamp", "VPN"]), Some(0));
    }

    #[test]
    fn test_header_as_last_row_yields_nothing() {
        let rows = vec![row(&["meta"]), row(&["Timestamp", "VPN"])];
        assert!(skip_preamble(rows, &["Timestamp", "VPN"]).is_empty());
    }
}
