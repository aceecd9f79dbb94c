//! CLI argument definitions using clap.

use std::path::PathBuf;

use assay::CheckCode;
use clap::Parser;

/// Assay: flag suspect features and cases in a tabular dataset
#[derive(Parser, Debug)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Check to run: A-E report columns, G-K report line numbers
    #[arg(value_name = "ACTION")]
    pub action: CheckCode,

    /// Path to the data file (CSV with a header row)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file overriding checker settings
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Token that marks a missing value (default: "?")
    #[arg(short, long, value_name = "TOKEN")]
    pub missing: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
