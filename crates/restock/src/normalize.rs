//! Per-field canonicalization for references, colors, sizes, dates and quantities.
//!
//! All functions here are pure and total: any input string produces a value,
//! never an error. Callers decide whether an empty result makes a row unusable.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical size labels in display order.
pub const SIZE_ORDER: &[&str] = &[
    "2XS", "XS", "S", "M", "L", "XL", "XXL", "3XL", "4XL", "5XL", "6XL",
];

/// Sort key given to dates that cannot be parsed, including the "-" placeholder.
pub const UNKNOWN_DATE_KEY: u32 = u32::MAX;

/// Placeholder used for a missing receive date.
pub const NO_DATE: &str = "-";

static BASE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+[0-9]+)").expect("base reference pattern"));

static DAY_FIRST_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("day-first date pattern"));

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("iso date pattern"));

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("integer pattern"));

/// Strip variant suffixes from a product reference.
///
/// The base reference is the leading run of letters followed by digits, so
/// `NS221A`, `NS221AX` and `NS221` all collapse to `NS221`. Inputs without a
/// letter+digit prefix are returned trimmed and otherwise unchanged.
pub fn base_reference(raw: &str) -> String {
    let trimmed = raw.trim();
    match BASE_REFERENCE.captures(trimmed) {
        Some(caps) => caps[1].to_string(),
        None => trimmed.to_string(),
    }
}

/// Accent, case and punctuation-insensitive key for a color name.
///
/// `"Vert Forêt"`, `"vert-foret"` and `" VERT FORET "` share the key `vertforet`.
pub fn color_key(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Display form of a color: trimmed, inner whitespace collapsed.
pub fn display_color(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse size synonyms onto the canonical label set.
///
/// Unrecognized labels come back uppercased with whitespace removed.
pub fn canonical_size(raw: &str) -> String {
    let up: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let canonical = match up.as_str() {
        "XXS" | "2XS" => "2XS",
        "XS" => "XS",
        "S" => "S",
        "M" => "M",
        "L" => "L",
        "XL" => "XL",
        "2XL" | "XXL" => "XXL",
        "3XL" => "3XL",
        "4XL" => "4XL",
        "5XL" => "5XL",
        "6XL" => "6XL",
        _ => return up,
    };
    canonical.to_string()
}

/// Position of a size in [`SIZE_ORDER`], if it is canonical.
pub fn size_rank(size: &str) -> Option<usize> {
    SIZE_ORDER.iter().position(|s| *s == size)
}

/// Order sizes canonically, then unknown sizes lexically, without duplicates.
pub fn sort_sizes<'a>(sizes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let unique: BTreeSet<&str> = sizes.into_iter().collect();
    let mut sorted: Vec<&str> = unique.into_iter().collect();
    // BTreeSet already ordered lexically; a stable sort by rank keeps that for ties.
    sorted.sort_by_key(|s| size_rank(s).unwrap_or(usize::MAX));
    sorted.into_iter().map(str::to_string).collect()
}

/// Parse a receive date into a `YYYYMMDD` integer for ordering.
///
/// Accepts `DD/MM/YYYY` and `YYYY-MM-DD`. Anything else, including the `-`
/// placeholder, maps to [`UNKNOWN_DATE_KEY`] so it sorts after every real date.
pub fn date_sort_key(raw: &str) -> u32 {
    parse_date(raw)
        .and_then(|d| {
            let year = u32::try_from(d.year()).ok()?;
            Some(year * 10_000 + d.month() * 100 + d.day())
        })
        .unwrap_or(UNKNOWN_DATE_KEY)
}

/// Parse a receive date in either supported calendar format.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if DAY_FIRST_DATE.is_match(trimmed) {
        NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").ok()
    } else if ISO_DATE.is_match(trimmed) {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
    } else {
        None
    }
}

/// Returns true if the date string is missing or cannot be ordered.
pub fn is_unknown_date(raw: &str) -> bool {
    date_sort_key(raw) == UNKNOWN_DATE_KEY
}

/// Parse a quantity cell.
///
/// Whitespace is ignored (`"1 200"` is 1200) and only the leading integer is
/// read. Non-numeric cells count as zero; negative values clamp to zero.
pub fn parse_quantity(raw: &str) -> u64 {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    LEADING_INTEGER
        .find(&compact)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map(|n| n.max(0) as u64)
        .unwrap_or(0)
}
