//! Run one check and print its findings.

use std::io::Write;
use std::path::{Path, PathBuf};

use assay::{CheckCode, Checker, CheckerConfig};
use tracing::debug;

/// Build the checker configuration from the optional file and overrides.
pub fn load_config(
    config_path: Option<&Path>,
    missing: Option<String>,
) -> Result<CheckerConfig, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::default(),
    };
    if let Some(token) = missing {
        config = config.with_missing_token(token);
    }
    Ok(config)
}

pub fn run(
    code: CheckCode,
    file: PathBuf,
    config: CheckerConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let checker = Checker::with_config(config)?;
    let report = checker.check_file(code, &file)?;

    debug!(
        file = %report.source.file,
        hash = %report.source.hash,
        rows = report.source.row_count,
        columns = report.source.column_count,
        missing = report.source.missing_cells,
        "loaded source"
    );

    write!(out, "{}", report.findings)?;
    out.flush()?;
    Ok(())
}
