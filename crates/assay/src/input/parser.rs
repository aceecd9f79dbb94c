//! CSV parser that turns the missing token into absent cells.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{Cell, SourceMetadata, Table};
use crate::config::CheckerConfig;
use crate::error::{AssayError, Result};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Literal token that marks a missing cell.
    pub missing_token: String,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_token: "?".to_string(),
            quote: b'"',
        }
    }
}

impl TryFrom<&CheckerConfig> for ParserConfig {
    type Error = AssayError;

    fn try_from(config: &CheckerConfig) -> Result<Self> {
        Ok(Self {
            delimiter: config.delimiter_byte()?,
            missing_token: config.missing_token.clone(),
            quote: b'"',
        })
    }
}

/// Parses delimited files with a header row.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| AssayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| AssayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(&contents)?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed input table"
        );

        let metadata = SourceMetadata::new(path.to_path_buf(), hash, contents.len() as u64, &table);
        Ok((table, metadata))
    }

    /// Parse in-memory bytes.
    ///
    /// A header-only input yields an empty table; an input without a header
    /// is rejected, as is a header that repeats a column name. Records whose
    /// field count differs from the header are a CSV error.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(false)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(AssayError::EmptyData("No columns found".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(name) = headers.iter().find(|h| !seen.insert(h.as_str())) {
            return Err(AssayError::DuplicateColumn(name.clone()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<Cell> = record.iter().map(|field| self.to_cell(field)).collect();
            rows.push(row);
        }

        Ok(Table::new(headers, rows))
    }

    fn to_cell(&self, field: &str) -> Cell {
        if field == self.config.missing_token {
            None
        } else {
            Some(field.to_string())
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
