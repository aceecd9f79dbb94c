//! Checker configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};

/// Tuning knobs shared by the parser and every check.
///
/// Defaults reproduce the grading dataset's conventions: `?` marks a missing
/// cell, `class!` holds the label, and outliers sit beyond three standard
/// deviations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Literal token that marks a missing cell.
    pub missing_token: String,
    /// Name of the class label column.
    pub class_column: String,
    /// Field delimiter of the input file.
    pub delimiter: char,
    /// Number of standard deviations beyond which a value is an outlier.
    pub z_threshold: f64,
    /// Absolute Pearson correlation above which two features are redundant.
    pub correlation_threshold: f64,
    /// Allowed slack between ECCEN and LENGHT / HEIGHT.
    pub eccentricity_tolerance: f64,
    /// Allowed slack between the pixel ratios and their counts over AREA.
    pub ratio_tolerance: f64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            missing_token: "?".to_string(),
            class_column: "class!".to_string(),
            delimiter: ',',
            z_threshold: 3.0,
            correlation_threshold: 0.95,
            eccentricity_tolerance: 0.01,
            ratio_tolerance: 0.001,
        }
    }
}

impl CheckerConfig {
    /// Load a configuration from a JSON file. Absent keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| AssayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CheckerConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Override the missing-value token.
    pub fn with_missing_token(mut self, token: impl Into<String>) -> Self {
        self.missing_token = token.into();
        self
    }

    /// Override the class column name.
    pub fn with_class_column(mut self, column: impl Into<String>) -> Self {
        self.class_column = column.into();
        self
    }

    /// Reject settings no check can run with.
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        if self.class_column.is_empty() {
            return Err(AssayError::Config("class_column must not be empty".to_string()));
        }

        let thresholds = [
            ("z_threshold", self.z_threshold),
            ("correlation_threshold", self.correlation_threshold),
            ("eccentricity_tolerance", self.eccentricity_tolerance),
            ("ratio_tolerance", self.ratio_tolerance),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(AssayError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// The delimiter as the byte the CSV reader expects.
    pub(crate) fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(u32::from(self.delimiter))
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                AssayError::Config(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                ))
            })
    }
}
