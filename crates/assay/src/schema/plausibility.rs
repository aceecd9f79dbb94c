//! Domain plausibility rules: positivity, proportions and class labels.

use super::{is_valid_class, POSITIVE_COLUMNS, PROPORTION_COLUMNS};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::input::Table;

/// Header positions of every column a plausibility rule looks at.
#[derive(Debug, Clone)]
pub struct PlausibilityColumns {
    positive: Vec<(usize, &'static str)>,
    proportion: Vec<(usize, &'static str)>,
    class: (usize, String),
}

impl PlausibilityColumns {
    /// Locate the rule columns, failing on the first absent one.
    pub fn resolve(table: &Table, config: &CheckerConfig) -> Result<Self> {
        let locate = |names: &[&'static str]| -> Result<Vec<(usize, &'static str)>> {
            names
                .iter()
                .map(|&name| Ok((table.require_column(name)?, name)))
                .collect()
        };

        Ok(Self {
            positive: locate(&POSITIVE_COLUMNS[..])?,
            proportion: locate(&PROPORTION_COLUMNS[..])?,
            class: (
                table.require_column(&config.class_column)?,
                config.class_column.clone(),
            ),
        })
    }

    /// Names of the columns holding an implausible value in this record.
    ///
    /// Missing cells never violate a rule.
    pub fn violations(&self, table: &Table, row: usize) -> Result<Vec<&str>> {
        let mut flagged = Vec::new();

        for &(col, name) in &self.positive {
            if let Some(value) = table.number(row, col)? {
                if value <= 0.0 {
                    flagged.push(name);
                }
            }
        }

        for &(col, name) in &self.proportion {
            if let Some(value) = table.number(row, col)? {
                if !(0.0..=1.0).contains(&value) {
                    flagged.push(name);
                }
            }
        }

        let (col, name) = (self.class.0, self.class.1.as_str());
        if let Some(label) = table.cell(row, col) {
            if !is_valid_class(label) {
                flagged.push(name);
            }
        }

        Ok(flagged)
    }
}
