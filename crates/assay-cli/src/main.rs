//! Assay CLI - run one data quality check against a CSV file.

mod check;
mod cli;
mod logging;

use clap::Parser;
use cli::Cli;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = check::load_config(cli.config.as_deref(), cli.missing).and_then(|config| {
        let stdout = std::io::stdout();
        check::run(cli.action, cli.file, config, &mut stdout.lock())
    });

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
