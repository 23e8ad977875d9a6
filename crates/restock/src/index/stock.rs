//! On-hand stock index.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use indexmap::IndexMap;

use super::DocumentIndex;
use super::record::StockRecord;
use crate::normalize::{base_reference, canonical_size, color_key, sort_sizes};
use crate::schema::{ColumnMap, ColumnRole};

/// Stock aggregated by reference, color and size.
///
/// Colors are matched on [`color_key`], so "Vert Forêt" and "vert foret"
/// land on the same entry. The display form kept is the first one seen.
#[derive(Debug, Clone, Default)]
pub struct StockIndex {
    /// base reference -> color key -> display color
    colors: BTreeMap<String, IndexMap<String, String>>,
    /// (base reference, color key) -> canonical sizes
    sizes: HashMap<(String, String), BTreeSet<String>>,
    /// (base reference, color key, size) -> summed quantity
    quantities: HashMap<(String, String, String), u64>,
}

impl StockIndex {
    /// All base references, sorted.
    pub fn unique_refs(&self) -> Vec<String> {
        self.colors.keys().cloned().collect()
    }

    /// Colors recorded for a reference, sorted ignoring case and accents.
    ///
    /// `reference` may carry a variant suffix; it is reduced to its base first.
    pub fn colors_for(&self, reference: &str) -> Vec<String> {
        let Some(colors) = self.colors.get(&base_reference(reference)) else {
            return Vec::new();
        };
        let mut entries: Vec<(&String, &String)> = colors.iter().collect();
        entries.sort();
        entries.into_iter().map(|(_, display)| display.clone()).collect()
    }

    /// Sizes for a reference and color in canonical order.
    pub fn sizes_for(&self, reference: &str, color: &str) -> Vec<String> {
        let key = (base_reference(reference), color_key(color));
        match self.sizes.get(&key) {
            Some(sizes) => sort_sizes(sizes.iter().map(String::as_str)),
            None => Vec::new(),
        }
    }

    /// Summed quantity for a key, 0 when nothing was recorded.
    pub fn stock(&self, reference: &str, color: &str, size: &str) -> u64 {
        let key = (
            base_reference(reference),
            color_key(color),
            canonical_size(size),
        );
        self.quantities.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct (reference, color, size) keys.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl DocumentIndex for StockIndex {
    type Record = StockRecord;

    const KIND: &'static str = "stock";
    const ROLES: &'static [ColumnRole] = ColumnRole::STOCK;

    fn record(row: &[String], columns: &ColumnMap) -> Option<StockRecord> {
        StockRecord::from_row(row, columns)
    }

    fn insert(&mut self, record: StockRecord) {
        let StockRecord {
            base_reference,
            color,
            color_key,
            size,
            quantity,
        } = record;

        self.colors
            .entry(base_reference.clone())
            .or_default()
            .entry(color_key.clone())
            .or_insert(color);

        self.sizes
            .entry((base_reference.clone(), color_key.clone()))
            .or_default()
            .insert(size.clone());

        let total = self
            .quantities
            .entry((base_reference, color_key, size))
            .or_insert(0);
        *total = total.saturating_add(quantity);
    }
}
