//! Fuzz target for the checks.
//!
//! Any table the parser accepts must either pass through every check or be
//! rejected with an error; no check may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use assay::{CheckCode, Checker, Parser};

fuzz_target!(|data: &[u8]| {
    if data.len() > 20_000 {
        return;
    }

    let Ok(table) = Parser::new().parse_bytes(data) else {
        return;
    };

    let checker = Checker::new();
    for code in CheckCode::ALL {
        if let Ok(findings) = checker.run(code, &table) {
            let _ = findings.to_string();
        }
    }
});
