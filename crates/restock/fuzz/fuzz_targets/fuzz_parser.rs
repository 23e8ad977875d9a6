//! Fuzz target for document parsing and indexing.
//!
//! This fuzzer tests that parsing and index construction:
//! 1. Never panic on malformed input
//! 2. Handle any mix of delimiters, blank lines and ragged rows
//! 3. Never report more records than rows

#![no_main]

use libfuzzer_sys::fuzz_target;
use restock::index::build_index;
use restock::input::Parser;
use restock::{ReplenishmentIndex, StockIndex};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(table) = Parser::new().parse_str(text) {
            let stock = build_index::<StockIndex>(&table);
            assert!(stock.records + stock.dropped <= table.row_count());

            let replenishment = build_index::<ReplenishmentIndex>(&table);
            assert!(replenishment.records + replenishment.dropped <= table.row_count());
        }
    }
});
