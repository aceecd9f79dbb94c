//! Example: Run every check against a page-block file.
//!
//! Usage:
//!   cargo run --example report -- <file_path>

use std::env;
use std::path::Path;

use assay::{CheckCode, Checker, Findings, Scope};

fn main() -> assay::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example report -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let checker = Checker::new();
    let (table, source) = checker.load(path)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Assay Report: {}", source.file);
    println!("{}", separator);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!("  Missing cells: {}", source.missing_cells);
    println!("  Hash: {}", source.hash);
    println!();

    for scope in [Scope::Feature, Scope::Case] {
        match scope {
            Scope::Feature => println!("## Features"),
            Scope::Case => println!("## Cases"),
        }
        for code in CheckCode::ALL.into_iter().filter(|c| c.scope() == scope) {
            match checker.run(code, &table) {
                Ok(findings) => println!("  {} {:32} {}", code, code.label(), summarize(&findings)),
                Err(e) => println!("  {} {:32} error: {}", code, code.label(), e),
            }
        }
        println!();
    }

    Ok(())
}

fn summarize(findings: &Findings) -> String {
    match findings {
        Findings::Columns(names) if names.is_empty() => "clean".to_string(),
        Findings::Columns(names) => names.iter().cloned().collect::<Vec<_>>().join(", "),
        Findings::Rows(lines) if lines.is_empty() => "clean".to_string(),
        Findings::Rows(lines) if lines.len() > 10 => format!("{} rows", lines.len()),
        Findings::Rows(lines) => {
            let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            format!("lines {}", lines.join(", "))
        }
    }
}
