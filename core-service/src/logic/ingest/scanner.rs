//! CSV Scanner
//!
//! Single-pass state machine that turns a published-sheet CSV export into
//! `RawRow`s. No regex, no backtracking: the only state is the current
//! cell buffer, the current row buffer and the scan state.
//!
//! ```text
//!            quote (cell blank)              quote
//!  UNQUOTED ───────────────────► QUOTED ─────────────► QUOTE_IN_QUOTED
//!     ▲                            ▲  ◄──── quote ("") ───────┘  │
//!     └──── delimiter / newline / other char ────────────────────┘
//! ```

use super::RawRow;

// ============================================================================
// SCAN STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside quotes
    Unquoted,
    /// Inside a quoted field
    Quoted,
    /// Just saw a quote while inside a quoted field
    QuoteInQuoted,
}

// ============================================================================
// ROW ASSEMBLER
// ============================================================================

#[derive(Default)]
struct RowAssembler {
    cell: String,
    row: Vec<String>,
    /// Current cell was opened with a quote (so `""` still counts as content)
    cell_quoted: bool,
    rows: Vec<RawRow>,
}

impl RowAssembler {
    fn end_cell(&mut self) {
        self.row.push(self.cell.trim().to_string());
        self.cell.clear();
        self.cell_quoted = false;
    }

    fn end_row(&mut self) {
        // Blank line: nothing collected at all
        if self.row.is_empty() && self.cell.is_empty() && !self.cell_quoted {
            return;
        }
        self.end_cell();
        self.rows.push(RawRow::new(std::mem::take(&mut self.row)));
    }
}

// ============================================================================
// SCANNER
// ============================================================================

/// CSV scanner (comma delimiter, double-quote quoting by default)
#[derive(Debug, Clone)]
pub struct CsvScanner {
    delimiter: char,
    quote: char,
}

impl Default for CsvScanner {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl CsvScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Scan the whole blob into rows, in source order
    pub fn scan(&self, input: &str) -> Vec<RawRow> {
        let mut state = ScanState::Unquoted;
        let mut acc = RowAssembler::default();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match state {
                ScanState::Unquoted => {
                    if c == self.delimiter {
                        acc.end_cell();
                    } else if c == self.quote && acc.cell.trim().is_empty() {
                        // Leading whitespace before an opening quote is dropped
                        acc.cell.clear();
                        acc.cell_quoted = true;
                        state = ScanState::Quoted;
                    } else if c == '\n' {
                        acc.end_row();
                    } else if c == '\r' {
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                        acc.end_row();
                    } else {
                        acc.cell.push(c);
                    }
                }
                ScanState::Quoted => {
                    if c == self.quote {
                        state = ScanState::QuoteInQuoted;
                    } else {
                        acc.cell.push(c);
                    }
                }
                ScanState::QuoteInQuoted => {
                    if c == self.quote {
                        // "" inside quotes is a literal quote
                        acc.cell.push(self.quote);
                        state = ScanState::Quoted;
                    } else if c == self.delimiter {
                        acc.end_cell();
                        state = ScanState::Unquoted;
                    } else if c == '\n' {
                        acc.end_row();
                        state = ScanState::Unquoted;
                    } else if c == '\r' {
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                        acc.end_row();
                        state = ScanState::Unquoted;
                    } else {
                        // Lenient: text after a closing quote joins the cell
                        acc.cell.push(c);
                        state = ScanState::Unquoted;
                    }
                }
            }
        }

        // Trailing row without newline, or an unterminated quoted field
        acc.end_row();

        acc.rows
    }
}

/// Scan with the default comma/double-quote dialect
pub fn scan(input: &str) -> Vec<RawRow> {
    CsvScanner::default().scan(input)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[RawRow]) -> Vec<Vec<&str>> {
        rows.iter()
            .map(|r| r.cells().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_unquoted_fields() {
        let rows = scan("a,b,c\nd,e,f\n");
        assert_eq!(cells(&rows), vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let rows = scan("  a , b ,c  ");
        assert_eq!(cells(&rows), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_quoted_comma() {
        let rows = scan("name,\"Proton, Stealth\",x");
        assert_eq!(cells(&rows), vec![vec!["name", "Proton, Stealth", "x"]]);
    }

    #[test]
    fn test_quoted_newline_and_escaped_quote() {
        let rows = scan("1,\"line one, \"\"quoted\"\"\nline two\",3\n4,5,6");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cell(1), Some("line one, \"quoted\"\nline two"));
        assert_eq!(rows[0].len(), 3);
        assert_eq!(cells(&rows)[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_crlf_terminators() {
        let rows = scan("a,b\r\nc,d\r\n");
        assert_eq!(cells(&rows), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_crlf_after_quoted_field() {
        let rows = scan("\"a\",\"b\"\r\n\"c\",\"d\"");
        assert_eq!(cells(&rows), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_row_without_newline() {
        let rows = scan("h1,h2\nv1,v2");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cell(1), Some("v2"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = scan("a,b\n\n\r\nc,d\n\n");
        assert_eq!(cells(&rows), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_quoted_empty_string_still_produces_row() {
        let rows = scan("a\n\"\"\nb");
        assert_eq!(cells(&rows), vec![vec!["a"], vec![""], vec!["b"]]);
    }

    #[test]
    fn test_empty_cells_preserved() {
        let rows = scan("a,,c,\n");
        assert_eq!(cells(&rows), vec![vec!["a", "", "c", ""]]);
    }

    #[test]
    fn test_unterminated_quote_flushed() {
        let rows = scan("a,\"never closed, still here");
        assert_eq!(cells(&rows), vec![vec!["a", "never closed, still here"]]);
    }

    #[test]
    fn test_text_after_closing_quote_is_kept() {
        let rows = scan("\"abc\"def,g");
        assert_eq!(cells(&rows), vec![vec!["abcdef", "g"]]);
    }

    #[test]
    fn test_quote_inside_unquoted_cell_is_literal() {
        let rows = scan("5\" screen,x");
        assert_eq!(cells(&rows), vec![vec!["5\" screen", "x"]]);
    }

    #[test]
    fn test_myanmar_text_passes_through() {
        let rows = scan("MPT,Proton,\"လိုင်းကောင်းသည်, အဆင်ပြေ\"");
        assert_eq!(rows[0].cell(2), Some("လိုင်းကောင်းသည်, အဆင်ပြေ"));
    }

    #[test]
    fn test_custom_delimiter() {
        let rows = CsvScanner::new().with_delimiter(';').scan("a;b,c");
        assert_eq!(cells(&rows), vec![vec!["a", "b,c"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
        assert!(scan("\n\r\n").is_empty());
    }
}
