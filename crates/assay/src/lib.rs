//! Assay: feature- and case-level data quality checks for tabular datasets.
//!
//! A table is parsed once from CSV, with the missing-value token turned into
//! absent cells, and then handed to one of ten checks. Feature checks (A to
//! E) report suspect column names; case checks (G to K) report the line
//! numbers of suspect records.
//!
//! | Code | Check |
//! |------|-------|
//! | A | identical features |
//! | B | correlated features |
//! | C | outlier features |
//! | D | conflicting features |
//! | E | implausible features |
//! | G | outlier cases |
//! | H | inconsistent cases |
//! | I | class-conditional outlier cases |
//! | J | conflicting cases |
//! | K | implausible cases |
//!
//! # Example
//!
//! ```no_run
//! use assay::{CheckCode, Checker};
//!
//! let checker = Checker::new();
//! let report = checker.check_file(CheckCode::D, "page-blocks.csv").unwrap();
//!
//! print!("{}", report.findings);
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod findings;
pub mod input;
pub mod schema;
pub mod stats;

mod checker;

pub use crate::checker::{CheckReport, Checker};
pub use checks::{Check, CheckCode, Scope};
pub use config::CheckerConfig;
pub use error::{AssayError, Result};
pub use findings::Findings;
pub use input::{Cell, Parser, ParserConfig, SourceMetadata, Table};
