//! Lookup indices built from parsed exports.

mod record;
mod replenishment;
mod stock;

pub use record::{ReplenishmentRecord, StockRecord};
pub use replenishment::{Delivery, Replenishment, ReplenishmentIndex};
pub use stock::StockIndex;

use tracing::debug;

use crate::input::DataTable;
use crate::schema::{ColumnMap, ColumnRole, HeaderLayout, LayoutKind};

/// An index that can be built in one pass over a document's rows.
pub trait DocumentIndex: Default + Send + Sync + 'static {
    /// Normalized row type.
    type Record;

    /// Short name for logs and errors.
    const KIND: &'static str;

    /// Required roles in positional-fallback order.
    const ROLES: &'static [ColumnRole];

    /// Normalize a data row, or `None` if it lacks a required field.
    fn record(row: &[String], columns: &ColumnMap) -> Option<Self::Record>;

    /// Fold a record into the index. Quantities accumulate.
    fn insert(&mut self, record: Self::Record);
}

/// Result of indexing one document.
#[derive(Debug)]
pub struct BuildOutcome<T> {
    pub index: T,
    pub layout: LayoutKind,
    /// Rows that made it into the index.
    pub records: usize,
    /// Rows dropped for missing required fields.
    pub dropped: usize,
}

/// Detect the header layout and fold every data row into a fresh index.
pub fn build_index<T: DocumentIndex>(table: &DataTable) -> BuildOutcome<T> {
    let mut index = T::default();

    let Some(first) = table.first_row() else {
        return BuildOutcome {
            index,
            layout: LayoutKind::Positional,
            records: 0,
            dropped: 0,
        };
    };

    let layout = HeaderLayout::detect(first, T::ROLES);
    let columns = layout.columns();

    let mut records = 0;
    let mut dropped = 0;
    for row in &table.rows[layout.data_start()..] {
        match T::record(row, columns) {
            Some(record) => {
                index.insert(record);
                records += 1;
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(kind = T::KIND, dropped, "skipped rows missing required fields");
    }

    BuildOutcome {
        index,
        layout: layout.kind(),
        records,
        dropped,
    }
}
