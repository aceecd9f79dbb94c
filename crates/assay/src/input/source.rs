//! Parsed table and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{AssayError, Result};

/// Offset from a zero-based record index to its line in the source file.
///
/// Line 1 holds the header, so the first record sits on line 2.
pub const LINE_OFFSET: usize = 2;

/// A single cell: `None` when the input carried the missing token.
pub type Cell = Option<String>;

/// Metadata about the source data file.
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Number of cells holding the missing token.
    pub missing_cells: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been parsed.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, table: &Table) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            row_count: table.row_count(),
            column_count: table.column_count(),
            missing_cells: table.missing_count(),
            loaded_at: Utc::now(),
        }
    }
}

/// Materialized tabular data, one record per input row.
///
/// Every record has exactly one cell per header; the parser guarantees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column headers in file order.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a new table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of a column the caller cannot do without.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| AssayError::MissingColumn(name.to_string()))
    }

    /// Positions of every column except the named one, in header order.
    pub fn columns_except(&self, name: &str) -> Vec<usize> {
        (0..self.column_count())
            .filter(|&i| self.headers[i] != name)
            .collect()
    }

    /// Get all cells for a column by index.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|c| c.as_deref()))
    }

    /// Get a specific cell value, `None` if missing or out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    /// Parse a cell as a number. Missing cells yield `Ok(None)`.
    pub fn number(&self, row: usize, col: usize) -> Result<Option<f64>> {
        match self.cell(row, col) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
                AssayError::NumericFormat {
                    line: line_number(row),
                    column: self.headers[col].clone(),
                    value: raw.to_string(),
                }
            }),
        }
    }

    /// Parse every cell of a column, keeping `None` for missing cells.
    pub fn numeric_column(&self, col: usize) -> Result<Vec<Option<f64>>> {
        (0..self.row_count()).map(|row| self.number(row, col)).collect()
    }

    /// Count the missing cells across the whole table.
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_none()).count())
            .sum()
    }
}

/// Line number of a zero-based record index.
pub fn line_number(row: usize) -> usize {
    row + LINE_OFFSET
}
