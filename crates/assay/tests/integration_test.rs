//! Integration tests for assay.

use std::io::Write;
use tempfile::NamedTempFile;

use assay::{AssayError, CheckCode, Checker, CheckerConfig, Findings};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// Run a check against inline CSV content and return the printed output.
fn output(code: CheckCode, content: &str) -> String {
    let file = create_test_file(content);
    Checker::new()
        .check_file(code, file.path())
        .expect("Check failed")
        .findings
        .to_string()
}

const HEADER: &str =
    "HEIGHT,LENGHT,AREA,ECCEN,P_BLACK,P_AND,MEAN_TR,BLACKPIX,BLACKAND,WB_TRANS,WIDTH,class!";

/// A consistent and plausible page block.
fn block(height: u32, length: u32, class: &str) -> String {
    let area = height * length;
    let blackpix = area / 2;
    let blackand = area / 4;
    format!(
        "{},{},{},{},{},{},2.5,{},{},7,{},{}",
        height,
        length,
        area,
        length as f64 / height as f64,
        blackpix as f64 / area as f64,
        blackand as f64 / area as f64,
        blackpix,
        blackand,
        length + 1,
        class
    )
}

fn dataset(rows: &[String]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

// =============================================================================
// Documented Scenarios
// =============================================================================

#[test]
fn test_identical_columns_reported_alphabetically() {
    let content = "B,A,class!\n1,1,1\n2,2,1\n3,3,2\n";
    assert_eq!(output(CheckCode::A, content), "2\nA\nB\n");
}

#[test]
fn test_area_conflict_feature_and_case() {
    let row = format!(
        "2,3,7,1.5,{},{},2.5,3,1,7,4,1",
        3.0 / 7.0,
        1.0 / 7.0
    );
    let content = dataset(&[row]);

    assert_eq!(output(CheckCode::D, &content), "3\nAREA\nHEIGHT\nLENGHT\n");
    assert_eq!(output(CheckCode::J, &content), "1\n2\n");
}

#[test]
fn test_all_missing_column_never_flagged() {
    let content = "A,B,class!\n?,1,1\n?,2,1\n?,3,2\n?,4,2\n";
    assert_eq!(output(CheckCode::C, content), "0\n");
    assert_eq!(output(CheckCode::G, content), "0\n");
}

#[test]
fn test_invalid_class_label() {
    let content = dataset(&[block(2, 4, "1"), block(3, 3, "6"), block(4, 2, "2")]);
    assert_eq!(output(CheckCode::E, &content), "1\nclass!\n");
    assert_eq!(output(CheckCode::K, &content), "1\n3\n");
}

// =============================================================================
// Full Dataset Behaviour
// =============================================================================

#[test]
fn test_clean_dataset_passes_rule_checks() {
    let rows: Vec<String> = (2..8)
        .map(|h| block(h, h + 3, &((h % 5) + 1).to_string()))
        .collect();
    let content = dataset(&rows);

    for code in [CheckCode::D, CheckCode::E, CheckCode::H, CheckCode::J, CheckCode::K] {
        assert_eq!(output(code, &content), "0\n", "check {} flagged a clean dataset", code);
    }
}

#[test]
fn test_missing_cells_skip_integrity_rules() {
    let conflicting = "2,3,7,?,0.5,0.2,2.5,3,1,7,4,1".to_string();
    let content = dataset(&[conflicting, block(2, 2, "3")]);

    assert_eq!(output(CheckCode::D, &content), "0\n");
    assert_eq!(output(CheckCode::J, &content), "0\n");
}

#[test]
fn test_inconsistent_duplicate_rows() {
    let content = dataset(&[
        block(2, 4, "1"),
        block(3, 5, "2"),
        block(2, 4, "4"),
        block(3, 5, "2"),
    ]);
    assert_eq!(output(CheckCode::H, &content), "2\n2\n4\n");
}

#[test]
fn test_row_numbers_sort_numerically() {
    let mut rows: Vec<String> = (0..12).map(|_| block(2, 4, "1")).collect();
    rows[0] = block(2, 4, "9");
    rows[10] = block(2, 4, "0");
    let content = dataset(&rows);

    assert_eq!(output(CheckCode::K, &content), "2\n2\n12\n");
}

#[test]
fn test_outlier_row_detected_by_case_check() {
    let mut rows: Vec<String> = (0..30).map(|_| block(4, 5, "1")).collect();
    rows.push(block(40, 50, "1"));
    let content = dataset(&rows);

    assert_eq!(output(CheckCode::G, &content), "1\n32\n");
    assert_eq!(output(CheckCode::I, &content), "1\n32\n");

    let features = output(CheckCode::C, &content);
    assert!(features.contains("AREA\n"));
    assert!(features.contains("HEIGHT\n"));
}

#[test]
fn test_header_only_file() {
    let content = format!("{}\n", HEADER);
    for code in CheckCode::ALL {
        assert_eq!(output(code, &content), "0\n", "check {} on empty table", code);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_missing_file_is_io_error() {
    let err = Checker::new()
        .check_file(CheckCode::A, "/nonexistent/blocks.csv")
        .unwrap_err();
    assert!(matches!(err, AssayError::Io { .. }));
}

#[test]
fn test_non_numeric_value_is_fatal() {
    let content = "A,B,class!\n1,2,1\n3,oops,2\n";
    let file = create_test_file(content);

    let err = Checker::new()
        .check_file(CheckCode::B, file.path())
        .unwrap_err();
    match err {
        AssayError::NumericFormat { line, column, value } => {
            assert_eq!(line, 3);
            assert_eq!(column, "B");
            assert_eq!(value, "oops");
        }
        other => panic!("expected NumericFormat, got {other}"),
    }
}

#[test]
fn test_repeated_column_name_is_rejected() {
    let file = create_test_file("A,B,A,class!\n1,5,1,1\n2,6,2,1\n3,7,3,2\n");

    let err = Checker::new()
        .check_file(CheckCode::A, file.path())
        .unwrap_err();
    assert!(matches!(err, AssayError::DuplicateColumn(ref name) if name == "A"));
    assert_eq!(err.to_string(), "Duplicate column: 'A'");
}

#[test]
fn test_schema_checks_require_columns() {
    let file = create_test_file("A,B,class!\n1,2,1\n");
    for code in [CheckCode::D, CheckCode::E, CheckCode::J, CheckCode::K] {
        let err = Checker::new().check_file(code, file.path()).unwrap_err();
        assert!(matches!(err, AssayError::MissingColumn(_)), "check {}", code);
    }
}

#[test]
fn test_unknown_action_is_reported() {
    let file = create_test_file("A,class!\n1,1\n");
    let checker = Checker::new();
    let (table, _) = checker.load(file.path()).unwrap();

    let err = checker.run_action("F", &table).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown check 'F'; expected one of A, B, C, D, E, G, H, I, J, K"
    );
    assert_eq!(
        checker.run_action("a", &table).unwrap(),
        Findings::from_columns(["A", "class!"])
    );
}

#[test]
fn test_configured_thresholds() {
    let content = "A,B,class!\n1,1,1\n2,2,1\n3,3,2\n4,5,2\n";
    let file = create_test_file(content);

    let strict = CheckerConfig {
        correlation_threshold: 0.999,
        ..CheckerConfig::default()
    };
    let findings = Checker::with_config(strict)
        .unwrap()
        .check_file(CheckCode::B, file.path())
        .unwrap()
        .findings;
    assert!(findings.is_empty());

    let findings = Checker::new()
        .check_file(CheckCode::B, file.path())
        .unwrap()
        .findings;
    assert_eq!(findings, Findings::from_columns(["A", "B"]));
}
