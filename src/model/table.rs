//! Tabular document model
//!
//! A `TableModel` owns the column headers and row data for one editing
//! session. The header order, fixed when the document is loaded or
//! created, defines both column order and serialization order. Rows are
//! keyed by header name; normalization on insert keeps every row's key
//! set identical to the header set.

use serde::Serialize;
use std::collections::BTreeMap;

/// Error type for row operations on a `TableModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// CRUD operation attempted before a document was loaded
    NotLoaded,
    /// Row index outside the current row range
    IndexOutOfRange { index: usize, row_count: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::NotLoaded => write!(f, "no document loaded"),
            TableError::IndexOutOfRange { index, row_count } => {
                write!(
                    f,
                    "row index {} out of range (table has {} rows)",
                    index, row_count
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

/// One record of the table: a cell value per header name.
///
/// Also used as the draft-row builder for [`TableModel::add_row`] and
/// [`TableModel::update_row`]; drafts may be sparse or carry foreign
/// keys, normalization happens on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    /// Create an empty row/draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from (header, value) pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set the value for a header, replacing any previous value
    pub fn set(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(header.into(), value.into());
    }

    /// Get the value for a header, empty string when absent
    pub fn get(&self, header: &str) -> &str {
        self.cells.get(header).map(String::as_str).unwrap_or("")
    }

    /// Whether the row carries a value for this header
    pub fn contains(&self, header: &str) -> bool {
        self.cells.contains_key(header)
    }

    /// Number of cells present
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over (header, value) pairs in header-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rebuild a draft against the header set: one cell per header,
    /// missing values filled with the empty string, foreign keys dropped.
    fn normalized(headers: &[String], draft: &Row) -> Row {
        Row {
            cells: headers
                .iter()
                .map(|h| (h.clone(), draft.get(h).to_string()))
                .collect(),
        }
    }
}

/// Document lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    /// No document loaded: no headers, no rows
    #[default]
    Empty,
    /// Headers fixed, zero or more rows
    Loaded { headers: Vec<String>, rows: Vec<Row> },
}

/// In-memory owner of headers + rows for one editing session
///
/// Starts `Empty`; `with_headers` (or the codec's decode) transitions to
/// `Loaded`, `reset` transitions back. Headers are immutable while
/// loaded; rows are edited in place through the row operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableModel {
    state: State,
}

impl TableModel {
    /// Create a model in the Empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new document with the given headers and zero rows
    ///
    /// Headers are taken as-is: no trimming, no deduplication. Duplicate
    /// names are representable (the codec's decode can produce them) and
    /// collapse to one cell per distinct name in every row.
    pub fn with_headers(headers: Vec<String>) -> Self {
        Self {
            state: State::Loaded {
                headers,
                rows: Vec::new(),
            },
        }
    }

    /// Internal constructor for the codec: rows must already be normalized
    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            state: State::Loaded { headers, rows },
        }
    }

    /// Whether a document is loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded { .. })
    }

    /// Discard the current document, returning to the Empty state
    pub fn reset(&mut self) {
        self.state = State::Empty;
    }

    /// Column headers in column order; empty when no document is loaded
    pub fn headers(&self) -> &[String] {
        match &self.state {
            State::Empty => &[],
            State::Loaded { headers, .. } => headers,
        }
    }

    /// Rows in document order; empty when no document is loaded
    pub fn rows(&self) -> &[Row] {
        match &self.state {
            State::Empty => &[],
            State::Loaded { rows, .. } => rows,
        }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Row at `index`, if any
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows().get(index)
    }

    /// Append a normalized copy of `draft` at the end of the table
    pub fn add_row(&mut self, draft: &Row) -> Result<(), TableError> {
        let (headers, rows) = self.loaded_mut()?;
        let row = Row::normalized(headers, draft);
        rows.push(row);
        Ok(())
    }

    /// Replace the row at `index` wholesale with a normalized copy of
    /// `draft` (not a merge). The model is untouched on failure.
    pub fn update_row(&mut self, index: usize, draft: &Row) -> Result<(), TableError> {
        let (headers, rows) = self.loaded_mut()?;
        if index >= rows.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                row_count: rows.len(),
            });
        }
        rows[index] = Row::normalized(headers, draft);
        Ok(())
    }

    /// Remove and return the row at `index`; later rows shift up one
    /// position, preserving their order.
    pub fn delete_row(&mut self, index: usize) -> Result<Row, TableError> {
        let (_, rows) = self.loaded_mut()?;
        if index >= rows.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                row_count: rows.len(),
            });
        }
        Ok(rows.remove(index))
    }

    fn loaded_mut(&mut self) -> Result<(&[String], &mut Vec<Row>), TableError> {
        match &mut self.state {
            State::Empty => Err(TableError::NotLoaded),
            State::Loaded { headers, rows } => Ok((headers.as_slice(), rows)),
        }
    }
}
