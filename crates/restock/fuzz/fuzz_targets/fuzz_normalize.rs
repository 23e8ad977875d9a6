//! Fuzz target for field normalizers.
//!
//! Checks that every normalizer is total and that the size and reference
//! normalizers are idempotent on arbitrary text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use restock::normalize::{
    base_reference, canonical_size, color_key, date_sort_key, parse_quantity,
};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(raw) = std::str::from_utf8(data) {
        let size = canonical_size(raw);
        assert_eq!(canonical_size(&size), size);

        let reference = base_reference(raw);
        assert_eq!(base_reference(&reference), reference);

        let key = color_key(raw);
        assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        let _ = date_sort_key(raw);
        let _ = parse_quantity(raw);
    }
});
