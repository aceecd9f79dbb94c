//! Fuzz target for the data parser.
//!
//! This fuzzer tests that the CSV parser:
//! 1. Never panics on malformed input
//! 2. Maps the missing token without losing cells

#![no_main]

use libfuzzer_sys::fuzz_target;
use assay::Parser;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(table) = Parser::new().parse_bytes(data) {
        for row in &table.rows {
            assert_eq!(row.len(), table.column_count());
        }
    }
});
