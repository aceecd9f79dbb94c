//! The ten data-quality checks and the codes that select them.
//!
//! Feature-level checks (A to E) report column names; case-level checks
//! (G to K) apply the same families of rules per record and report line
//! numbers. Every check is a pure function of the table and configuration.

mod cases;
mod features;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::config::CheckerConfig;
use crate::error::{AssayError, Result};
use crate::findings::Findings;
use crate::input::Table;
use crate::stats::ColumnStats;

pub use cases::{
    ClassOutlierCases, ConflictingCases, ImplausibleCases, InconsistentCases, OutlierCases,
};
pub use features::{
    ConflictingFeatures, CorrelatedFeatures, IdenticalFeatures, ImplausibleFeatures,
    OutlierFeatures,
};

/// Trait for checks.
pub trait Check {
    /// The code that selects this check.
    fn code(&self) -> CheckCode;

    /// Run the check and return what it flagged.
    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings>;
}

/// Whether a check reports columns or rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Reports column names.
    Feature,
    /// Reports line numbers.
    Case,
}

/// Action code of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckCode {
    A,
    B,
    C,
    D,
    E,
    G,
    H,
    I,
    J,
    K,
}

impl CheckCode {
    /// Every check, in code order.
    pub const ALL: [CheckCode; 10] = [
        CheckCode::A,
        CheckCode::B,
        CheckCode::C,
        CheckCode::D,
        CheckCode::E,
        CheckCode::G,
        CheckCode::H,
        CheckCode::I,
        CheckCode::J,
        CheckCode::K,
    ];

    /// Get a human-readable label for the check.
    pub fn label(&self) -> &'static str {
        match self {
            CheckCode::A => "Identical features",
            CheckCode::B => "Correlated features",
            CheckCode::C => "Outlier features",
            CheckCode::D => "Conflicting features",
            CheckCode::E => "Implausible features",
            CheckCode::G => "Outlier cases",
            CheckCode::H => "Inconsistent cases",
            CheckCode::I => "Class-conditional outlier cases",
            CheckCode::J => "Conflicting cases",
            CheckCode::K => "Implausible cases",
        }
    }

    /// Whether the check reports columns or rows.
    pub fn scope(&self) -> Scope {
        match self {
            CheckCode::A | CheckCode::B | CheckCode::C | CheckCode::D | CheckCode::E => {
                Scope::Feature
            }
            CheckCode::G | CheckCode::H | CheckCode::I | CheckCode::J | CheckCode::K => {
                Scope::Case
            }
        }
    }

    /// The check implementation behind this code.
    pub fn check(&self) -> Box<dyn Check> {
        match self {
            CheckCode::A => Box::new(IdenticalFeatures),
            CheckCode::B => Box::new(CorrelatedFeatures),
            CheckCode::C => Box::new(OutlierFeatures),
            CheckCode::D => Box::new(ConflictingFeatures),
            CheckCode::E => Box::new(ImplausibleFeatures),
            CheckCode::G => Box::new(OutlierCases),
            CheckCode::H => Box::new(InconsistentCases),
            CheckCode::I => Box::new(ClassOutlierCases),
            CheckCode::J => Box::new(ConflictingCases),
            CheckCode::K => Box::new(ImplausibleCases),
        }
    }
}

impl FromStr for CheckCode {
    type Err = AssayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(CheckCode::A),
            "B" => Ok(CheckCode::B),
            "C" => Ok(CheckCode::C),
            "D" => Ok(CheckCode::D),
            "E" => Ok(CheckCode::E),
            "G" => Ok(CheckCode::G),
            "H" => Ok(CheckCode::H),
            "I" => Ok(CheckCode::I),
            "J" => Ok(CheckCode::J),
            "K" => Ok(CheckCode::K),
            _ => Err(AssayError::UnknownCheck(s.to_string())),
        }
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Parse the given columns, keyed by header position in the order given.
fn parse_columns(table: &Table, columns: &[usize]) -> Result<IndexMap<usize, Vec<Option<f64>>>> {
    columns
        .iter()
        .map(|&col| Ok((col, table.numeric_column(col)?)))
        .collect()
}

/// The present values of a parsed column.
fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

/// Mean and spread of every parsed column over its present values.
fn column_stats(parsed: &IndexMap<usize, Vec<Option<f64>>>) -> IndexMap<usize, ColumnStats> {
    parsed
        .iter()
        .map(|(&col, values)| (col, ColumnStats::from_values(&present(values))))
        .collect()
}
