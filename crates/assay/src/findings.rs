//! Finding sets produced by the checks and their printed form.

use std::collections::BTreeSet;
use std::fmt;

/// The columns or rows a check identified.
///
/// Feature-level checks report column names, case-level checks report line
/// numbers. Members are kept in a `BTreeSet` so printing order is the
/// natural order of the member type: byte-wise for names, numeric for lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Findings {
    /// Flagged column names.
    Columns(BTreeSet<String>),
    /// Flagged line numbers (record index + 2).
    Rows(BTreeSet<usize>),
}

impl Findings {
    /// Build a column finding set.
    pub fn from_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Findings::Columns(names.into_iter().map(Into::into).collect())
    }

    /// Build a row finding set from line numbers.
    pub fn from_lines(lines: impl IntoIterator<Item = usize>) -> Self {
        Findings::Rows(lines.into_iter().collect())
    }

    /// Number of distinct findings.
    pub fn len(&self) -> usize {
        match self {
            Findings::Columns(set) => set.len(),
            Findings::Rows(set) => set.len(),
        }
    }

    /// Whether the check found nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flagged column names, if this is a feature-level result.
    pub fn columns(&self) -> Option<&BTreeSet<String>> {
        match self {
            Findings::Columns(set) => Some(set),
            Findings::Rows(_) => None,
        }
    }

    /// Flagged line numbers, if this is a case-level result.
    pub fn lines(&self) -> Option<&BTreeSet<usize>> {
        match self {
            Findings::Rows(set) => Some(set),
            Findings::Columns(_) => None,
        }
    }
}

/// Count on the first line, then one member per line in ascending order.
impl fmt::Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.len())?;
        match self {
            Findings::Columns(set) => {
                for name in set {
                    writeln!(f, "{}", name)?;
                }
            }
            Findings::Rows(set) => {
                for line in set {
                    writeln!(f, "{}", line)?;
                }
            }
        }
        Ok(())
    }
}
