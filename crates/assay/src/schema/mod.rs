//! The fixed page-block dataset schema and the rules tied to its columns.
//!
//! Column names are spelled exactly as the dataset ships them, including
//! `LENGHT`.

mod integrity;
mod plausibility;

pub use integrity::{IntegrityColumns, IntegrityRule, Measurements};
pub use plausibility::PlausibilityColumns;

pub const HEIGHT: &str = "HEIGHT";
pub const LENGHT: &str = "LENGHT";
pub const AREA: &str = "AREA";
pub const ECCEN: &str = "ECCEN";
pub const P_BLACK: &str = "P_BLACK";
pub const P_AND: &str = "P_AND";
pub const BLACKPIX: &str = "BLACKPIX";
pub const BLACKAND: &str = "BLACKAND";
pub const WIDTH: &str = "WIDTH";
pub const WB_TRANS: &str = "WB_TRANS";
pub const MEAN_TR: &str = "MEAN_TR";

/// Columns that take part in the referential-integrity identities.
pub const INTEGRITY_COLUMNS: [&str; 8] = [
    HEIGHT, LENGHT, AREA, ECCEN, P_BLACK, P_AND, BLACKPIX, BLACKAND,
];

/// Columns whose present values must be strictly positive.
pub const POSITIVE_COLUMNS: [&str; 9] = [
    HEIGHT, LENGHT, WIDTH, AREA, BLACKPIX, BLACKAND, WB_TRANS, MEAN_TR, ECCEN,
];

/// Columns whose present values must lie in `[0, 1]`.
pub const PROPORTION_COLUMNS: [&str; 2] = [P_BLACK, P_AND];

/// Legal class labels, compared as raw strings.
pub const VALID_CLASSES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Whether a raw class cell is one of the legal labels.
///
/// The comparison is literal: `"1.0"` and `" 1"` are not valid labels.
pub fn is_valid_class(value: &str) -> bool {
    VALID_CLASSES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_classes() {
        for label in ["1", "2", "3", "4", "5"] {
            assert!(is_valid_class(label));
        }
        for label in ["0", "6", "1.0", " 1", "", "one"] {
            assert!(!is_valid_class(label));
        }
    }
}
