//! Feature-level checks: each reports the set of suspect column names.

use std::collections::BTreeSet;

use tracing::debug;

use super::{column_stats, parse_columns, present, Check, CheckCode};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::findings::Findings;
use crate::input::{line_number, Table};
use crate::schema::{IntegrityColumns, PlausibilityColumns};
use crate::stats::pearson;

/// A: columns whose cell sequences are identical across all records.
///
/// The class column takes part, and a missing cell only equals another
/// missing cell.
pub struct IdenticalFeatures;

impl Check for IdenticalFeatures {
    fn code(&self) -> CheckCode {
        CheckCode::A
    }

    fn run(&self, table: &Table, _config: &CheckerConfig) -> Result<Findings> {
        let mut found = BTreeSet::new();
        if table.row_count() == 0 {
            return Ok(Findings::Columns(found));
        }

        let columns: Vec<Vec<Option<&str>>> = (0..table.column_count())
            .map(|col| table.column_cells(col).collect())
            .collect();

        for i in 0..columns.len() {
            for j in (i + 1)..columns.len() {
                if columns[i] == columns[j] {
                    debug!(first = %table.headers[i], second = %table.headers[j], "identical features");
                    found.insert(table.headers[i].clone());
                    found.insert(table.headers[j].clone());
                }
            }
        }

        Ok(Findings::Columns(found))
    }
}

/// B: pairs of non-class columns whose absolute Pearson correlation over
/// jointly present values exceeds the correlation threshold.
pub struct CorrelatedFeatures;

impl Check for CorrelatedFeatures {
    fn code(&self) -> CheckCode {
        CheckCode::B
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let features = table.columns_except(&config.class_column);
        let parsed = parse_columns(table, &features)?;
        let columns: Vec<(usize, &Vec<Option<f64>>)> =
            parsed.iter().map(|(&col, values)| (col, values)).collect();

        let mut found = BTreeSet::new();
        for (i, &(first, xs_all)) in columns.iter().enumerate() {
            for &(second, ys_all) in &columns[i + 1..] {
                let (xs, ys): (Vec<f64>, Vec<f64>) = xs_all
                    .iter()
                    .zip(ys_all)
                    .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                    .unzip();

                if xs.is_empty() {
                    continue;
                }

                let r = pearson(&xs, &ys);
                if r.abs() > config.correlation_threshold {
                    debug!(
                        first = %table.headers[first],
                        second = %table.headers[second],
                        r,
                        "correlated features"
                    );
                    found.insert(table.headers[first].clone());
                    found.insert(table.headers[second].clone());
                }
            }
        }

        Ok(Findings::Columns(found))
    }
}

/// C: non-class columns with at least one present value beyond the z
/// threshold.
pub struct OutlierFeatures;

impl Check for OutlierFeatures {
    fn code(&self) -> CheckCode {
        CheckCode::C
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let features = table.columns_except(&config.class_column);
        let parsed = parse_columns(table, &features)?;
        let stats = column_stats(&parsed);

        let mut found = BTreeSet::new();
        for (col, values) in &parsed {
            let column = &stats[col];
            if present(values)
                .into_iter()
                .any(|value| column.deviates(value, config.z_threshold))
            {
                debug!(column = %table.headers[*col], mean = column.mean, std = column.std, "outlier feature");
                found.insert(table.headers[*col].clone());
            }
        }

        Ok(Findings::Columns(found))
    }
}

/// D: columns involved in a broken referential-integrity identity in any
/// fully populated record.
pub struct ConflictingFeatures;

impl Check for ConflictingFeatures {
    fn code(&self) -> CheckCode {
        CheckCode::D
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let integrity = IntegrityColumns::resolve(table)?;

        let mut found = BTreeSet::new();
        for row in 0..table.row_count() {
            let Some(measurements) = integrity.measurements(table, row)? else {
                continue;
            };
            for rule in measurements.violations(config) {
                debug!(rule = rule.label(), line = line_number(row), "conflicting features");
                found.extend(rule.columns().iter().map(|name| name.to_string()));
            }
        }

        Ok(Findings::Columns(found))
    }
}

/// E: columns holding at least one implausible present value.
pub struct ImplausibleFeatures;

impl Check for ImplausibleFeatures {
    fn code(&self) -> CheckCode {
        CheckCode::E
    }

    fn run(&self, table: &Table, config: &CheckerConfig) -> Result<Findings> {
        let rules = PlausibilityColumns::resolve(table, config)?;

        let mut found = BTreeSet::new();
        for row in 0..table.row_count() {
            found.extend(rules.violations(table, row)?.into_iter().map(String::from));
        }

        Ok(Findings::Columns(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{block_row, table, SCHEMA_HEADER};

    fn run(check: &dyn Check, csv: &str) -> Findings {
        check.run(&table(csv), &CheckerConfig::default()).unwrap()
    }

    #[test]
    fn test_identical_features() {
        let found = run(&IdenticalFeatures, "B,A,C,class!\n1,1,1,1\n2,2,5,1\n3,3,6,2\n");
        assert_eq!(found.to_string(), "2\nA\nB\n");
    }

    #[test]
    fn test_identical_features_transitive() {
        let found = run(&IdenticalFeatures, "X,Y,Z,class!\n1,1,1,1\n?,?,?,2\n");
        assert_eq!(found, Findings::from_columns(["X", "Y", "Z"]));
    }

    #[test]
    fn test_identical_includes_class_column() {
        let found = run(&IdenticalFeatures, "A,B,class!\n1,4,1\n2,5,2\n");
        assert_eq!(found, Findings::from_columns(["A", "class!"]));
    }

    #[test]
    fn test_identical_missing_differs_from_value() {
        let found = run(&IdenticalFeatures, "A,B,class!\n1,1,1\n?,2,1\n");
        assert!(found.is_empty());
    }

    #[test]
    fn test_correlated_features() {
        let csv = "A,B,C,class!\n1,2,5,1\n2,4,1,1\n3,6,4,2\n4,8,2,2\n";
        let found = run(&CorrelatedFeatures, csv);
        assert_eq!(found, Findings::from_columns(["A", "B"]));
    }

    #[test]
    fn test_correlated_skips_missing_pairs() {
        let csv = "A,B,class!\n1,?,1\n2,4,1\n3,6,1\n4,8,2\n";
        let found = run(&CorrelatedFeatures, csv);
        assert_eq!(found, Findings::from_columns(["A", "B"]));

        let disjoint = "A,B,class!\n1,?,1\n?,4,1\n";
        assert!(run(&CorrelatedFeatures, disjoint).is_empty());
    }

    #[test]
    fn test_correlated_ignores_class_column() {
        let csv = "A,B,class!\n1,5,1\n2,3,2\n3,4,3\n";
        assert!(run(&CorrelatedFeatures, csv).is_empty());
    }

    #[test]
    fn test_outlier_features() {
        let mut csv = String::from("A,B,class!\n");
        for _ in 0..20 {
            csv.push_str("10,10,1\n");
        }
        csv.push_str("10,1000,1\n");

        let found = run(&OutlierFeatures, &csv);
        assert_eq!(found, Findings::from_columns(["B"]));
    }

    #[test]
    fn test_outlier_features_all_missing_column() {
        let found = run(&OutlierFeatures, "A,B,class!\n?,1,1\n?,2,1\n");
        assert!(found.is_empty());
    }

    #[test]
    fn test_non_numeric_feature_is_an_error() {
        let result = OutlierFeatures.run(&table("A,class!\nfoo,1\n"), &CheckerConfig::default());
        assert!(matches!(
            result,
            Err(crate::error::AssayError::NumericFormat { line: 2, .. })
        ));
    }

    #[test]
    fn test_conflicting_features_area() {
        let csv = format!(
            "{}\n2,3,7,1.5,{},{},1.5,3,1,3,3,1\n",
            SCHEMA_HEADER,
            3.0 / 7.0,
            1.0 / 7.0
        );
        let found = run(&ConflictingFeatures, &csv);
        assert_eq!(found.to_string(), "3\nAREA\nHEIGHT\nLENGHT\n");
    }

    #[test]
    fn test_conflicting_features_skip_incomplete_rows() {
        let csv = format!("{}\n2,3,7,?,0.5,0.2,1.5,3,1,3,3,1\n{}\n", SCHEMA_HEADER, block_row(4, 5, "2"));
        assert!(run(&ConflictingFeatures, &csv).is_empty());
    }

    #[test]
    fn test_conflicting_features_ratios() {
        let csv = format!("{}\n2,3,6,1.5,0.9,0.9,1.5,3,1,3,3,1\n", SCHEMA_HEADER);
        let found = run(&ConflictingFeatures, &csv);
        assert_eq!(
            found,
            Findings::from_columns(["AREA", "BLACKAND", "BLACKPIX", "P_AND", "P_BLACK"])
        );
    }

    #[test]
    fn test_conflicting_features_requires_schema() {
        let result = ConflictingFeatures.run(&table("A,class!\n1,1\n"), &CheckerConfig::default());
        assert!(matches!(result, Err(crate::error::AssayError::MissingColumn(_))));
    }

    #[test]
    fn test_implausible_features() {
        let csv = format!(
            "{}\n{}\n2,3,6,1.5,0.5,1.25,1.5,3,1,3,-3,6\n",
            SCHEMA_HEADER,
            block_row(2, 4, "1")
        );
        let found = run(&ImplausibleFeatures, &csv);
        assert_eq!(found.to_string(), "3\nP_AND\nWIDTH\nclass!\n");
    }

    #[test]
    fn test_implausible_features_clean() {
        let csv = format!("{}\n{}\n{}\n", SCHEMA_HEADER, block_row(2, 4, "1"), block_row(3, 6, "5"));
        assert!(run(&ImplausibleFeatures, &csv).is_empty());
    }
}
