//! Permissive CSV decode/encode
//!
//! Deliberately a subset of RFC 4180: fields split on every comma and
//! records on every line feed, with no quote or escape handling. A comma
//! inside a quoted field is treated as a field separator. Callers that
//! need full RFC 4180 parsing should treat that as a separate upgrade,
//! not a patch to this codec.
//!
//! The decoder degrades gracefully on malformed rows: short rows are
//! filled with empty strings, long rows lose their extra fields. The
//! only decode failure is an empty document, which has no header line.

use crate::model::{Row, TableModel};

/// Error type for CSV decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty, so no header line exists
    EmptyInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty document: no header line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Decode CSV text into a loaded `TableModel`
///
/// The first line becomes the headers, taken verbatim (no trimming, no
/// deduplication; with duplicate names the later column wins, one cell
/// per distinct name). Every later line becomes one row, zipped
/// positionally against the headers. A single trailing empty line from
/// a final line feed is dropped.
pub fn decode(text: &str) -> Result<TableModel, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut lines: Vec<&str> = text.split('\n').collect();
    // A final line feed yields one empty trailing slice; drop it so it
    // does not become a spurious all-empty row.
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }

    let headers: Vec<String> = lines[0].split(',').map(str::to_string).collect();

    let rows = lines[1..]
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            let mut row = Row::new();
            for (i, header) in headers.iter().enumerate() {
                // Short line: missing trailing fields fill with "".
                // Long line: fields past the header count are dropped.
                row.set(header.clone(), *fields.get(i).unwrap_or(&""));
            }
            row
        })
        .collect();

    Ok(TableModel::from_parts(headers, rows))
}

/// Encode a `TableModel` as CSV text
///
/// Headers first, then one line per row with values looked up in header
/// order. No trailing line feed, no quoting; values are emitted as-is,
/// symmetric with [`decode`]'s lack of quote awareness. An Empty model
/// encodes to the empty string.
pub fn encode(model: &TableModel) -> String {
    let headers = model.headers();
    let mut out = headers.join(",");

    for row in model.rows() {
        out.push('\n');
        let line: Vec<&str> = headers.iter().map(|h| row.get(h)).collect();
        out.push_str(&line.join(","));
    }

    out
}
