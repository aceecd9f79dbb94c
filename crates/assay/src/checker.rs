//! Main Checker struct and public API.

use std::path::Path;

use tracing::{debug, info};

use crate::checks::CheckCode;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::findings::Findings;
use crate::input::{Parser, ParserConfig, SourceMetadata, Table};

/// Result of running one check against a data file.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The check that ran.
    pub code: CheckCode,
    /// What the check flagged.
    pub findings: Findings,
}

/// Loads tables and dispatches checks against them.
pub struct Checker {
    config: CheckerConfig,
    parser: Parser,
}

impl Checker {
    /// Create a new Checker with default configuration.
    pub fn new() -> Self {
        Self {
            config: CheckerConfig::default(),
            parser: Parser::new(),
        }
    }

    /// Create a Checker with custom configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        let parser = Parser::with_config(ParserConfig::try_from(&config)?);
        Ok(Self { config, parser })
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Parse a data file into a table.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Run one check against an already loaded table.
    pub fn run(&self, code: CheckCode, table: &Table) -> Result<Findings> {
        debug!(check = %code, label = code.label(), rows = table.row_count(), "running check");
        let findings = code.check().run(table, &self.config)?;
        info!(check = %code, findings = findings.len(), "check complete");
        Ok(findings)
    }

    /// Run the check named by a raw action code.
    ///
    /// Unknown codes are an error rather than a silent no-op.
    pub fn run_action(&self, action: &str, table: &Table) -> Result<Findings> {
        let code: CheckCode = action.parse()?;
        self.run(code, table)
    }

    /// Load a data file and run one check against it.
    pub fn check_file(&self, code: CheckCode, path: impl AsRef<Path>) -> Result<CheckReport> {
        let (table, source) = self.load(path)?;
        let findings = self.run(code, &table)?;
        Ok(CheckReport {
            source,
            code,
            findings,
        })
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
