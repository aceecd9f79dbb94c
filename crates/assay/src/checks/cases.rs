//! Case-level checks: each reports the line numbers of suspect records.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::debug;

use super::{Check, CheckCode};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::findings::Findings;
use crate::input::{line_number, Table};
use crate::schema::{is_valid_class, IntegrityColumns, IntegrityRule, PlausibilityColumns};
use crate::stats::ColumnStats;

/// G: records with at least one present value beyond the z threshold of
/// its column.
pub struct OutlierCases;

impl Check for OutlierCases {
    fn code(&self) -> CheckCode {
        CheckCode::G
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let features = table.columns_except(&config.class_column);
        let rows: Vec<usize> = (0..table.row_count()).collect();
        let flagged = outlier_rows(table, &rows, &features, config.z_threshold)?;

        Ok(Findings::from_lines(flagged.into_iter().map(line_number)))
    }
}

/// H: records that agree on every feature but disagree on the class label.
///
/// A missing label counts as a label of its own.
pub struct InconsistentCases;

#[derive(Default)]
struct Group<'a> {
    rows: Vec<usize>,
    classes: BTreeSet<Option<&'a str>>,
}

impl Check for InconsistentCases {
    fn code(&self) -> CheckCode {
        CheckCode::H
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let class = table.require_column(&config.class_column)?;
        let features = table.columns_except(&config.class_column);

        let mut groups: IndexMap<Vec<Option<&str>>, Group<'_>> = IndexMap::new();
        for row in 0..table.row_count() {
            let key: Vec<Option<&str>> = features.iter().map(|&col| table.cell(row, col)).collect();
            let group = groups.entry(key).or_default();
            group.rows.push(row);
            group.classes.insert(table.cell(row, class));
        }

        let mut found = BTreeSet::new();
        for group in groups.values().filter(|g| g.classes.len() > 1) {
            debug!(rows = group.rows.len(), labels = group.classes.len(), "inconsistent group");
            found.extend(group.rows.iter().copied().map(line_number));
        }

        Ok(Findings::Rows(found))
    }
}

/// I: records that are outliers within their own class.
///
/// Only records carrying a valid label take part; statistics are computed
/// per label over that label's records.
pub struct ClassOutlierCases;

impl Check for ClassOutlierCases {
    fn code(&self) -> CheckCode {
        CheckCode::I
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let class = table.require_column(&config.class_column)?;
        let features = table.columns_except(&config.class_column);

        let mut partitions: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for row in 0..table.row_count() {
            if let Some(label) = table.cell(row, class).filter(|l| is_valid_class(l)) {
                partitions.entry(label).or_default().push(row);
            }
        }

        let mut found = BTreeSet::new();
        for (label, rows) in &partitions {
            let flagged = outlier_rows(table, rows, &features, config.z_threshold)?;
            debug!(class = %label, rows = rows.len(), flagged = flagged.len(), "class partition");
            found.extend(flagged.into_iter().map(line_number));
        }

        Ok(Findings::Rows(found))
    }
}

/// J: fully populated records that break any referential-integrity
/// identity.
pub struct ConflictingCases;

impl Check for ConflictingCases {
    fn code(&self) -> CheckCode {
        CheckCode::J
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let integrity = IntegrityColumns::resolve(table)?;

        let mut found = BTreeSet::new();
        for row in 0..table.row_count() {
            let Some(measurements) = integrity.measurements(table, row)? else {
                continue;
            };
            if let Some(rule) = IntegrityRule::ALL
                .into_iter()
                .find(|&rule| measurements.violates(rule, config))
            {
                debug!(rule = rule.label(), line = line_number(row), "conflicting case");
                found.insert(line_number(row));
            }
        }

        Ok(Findings::Rows(found))
    }
}

/// K: records holding at least one implausible present value.
pub struct ImplausibleCases;

impl Check for ImplausibleCases {
    fn code(&self) -> CheckCode {
        CheckCode::K
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let rules = PlausibilityColumns::resolve(table, config)?;

        let mut found = BTreeSet::new();
        for row in 0..table.row_count() {
            if !rules.violations(table, row)?.is_empty() {
                found.insert(line_number(row));
            }
        }

        Ok(Findings::Rows(found))
    }
}

/// Rows (zero-based) among `rows` with any present feature value beyond
/// `z` standard deviations of that feature, computed over `rows` only.
fn outlier_rows(table: &Table, rows: &[usize], features: &[usize], z: f64) -> Result<Vec<usize>> {
    let mut parsed: IndexMap<usize, (Vec<Option<f64>>, ColumnStats)> = IndexMap::new();
    for &col in features {
        let values = rows
            .iter()
            .map(|&row| table.number(row, col))
            .collect::<Result<Vec<_>>>()?;
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        parsed.insert(col, (values, ColumnStats::from_values(&present)));
    }

    let flagged = rows
        .iter()
        .enumerate()
        .filter(|&(i, _)| {
            parsed
                .values()
                .any(|(values, stats)| values[i].is_some_and(|v| stats.deviates(v, z)))
        })
        .map(|(_, &row)| row)
        .collect();

    Ok(flagged)
}
