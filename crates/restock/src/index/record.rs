//! Normalized rows.

use serde::{Deserialize, Serialize};

use crate::normalize::{
    NO_DATE, base_reference, canonical_size, color_key, display_color, parse_quantity,
};
use crate::schema::{ColumnMap, ColumnRole};

/// One valid row of a stock export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub base_reference: String,
    /// Color as displayed: trimmed, whitespace collapsed.
    pub color: String,
    pub color_key: String,
    /// Canonical size label.
    pub size: String,
    pub quantity: u64,
}

impl StockRecord {
    /// Normalize a data row. Returns `None` when the reference, color or
    /// size is missing or normalizes to nothing.
    pub fn from_row(row: &[String], columns: &ColumnMap) -> Option<Self> {
        let key = RowKey::from_row(row, columns)?;
        let quantity = columns
            .field(row, ColumnRole::Quantity)
            .map(parse_quantity)
            .unwrap_or(0);

        Some(Self {
            base_reference: key.base_reference,
            color: key.color,
            color_key: key.color_key,
            size: key.size,
            quantity,
        })
    }
}

/// One valid row of a replenishment export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentRecord {
    pub base_reference: String,
    pub color_key: String,
    pub color: String,
    pub size: String,
    /// Receive date as written in the export, or `-` when blank.
    pub receive_date: String,
    pub quantity: u64,
}

impl ReplenishmentRecord {
    pub fn from_row(row: &[String], columns: &ColumnMap) -> Option<Self> {
        let key = RowKey::from_row(row, columns)?;
        let receive_date = columns
            .field(row, ColumnRole::ReceiveDate)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DATE)
            .to_string();
        let quantity = columns
            .field(row, ColumnRole::Quantity)
            .map(parse_quantity)
            .unwrap_or(0);

        Some(Self {
            base_reference: key.base_reference,
            color_key: key.color_key,
            color: key.color,
            size: key.size,
            receive_date,
            quantity,
        })
    }
}

/// The three required fields shared by both exports.
struct RowKey {
    base_reference: String,
    color: String,
    color_key: String,
    size: String,
}

impl RowKey {
    fn from_row(row: &[String], columns: &ColumnMap) -> Option<Self> {
        let base_reference = base_reference(columns.field(row, ColumnRole::Reference)?);
        let color = display_color(columns.field(row, ColumnRole::Color)?);
        let color_key = color_key(&color);
        let size = canonical_size(columns.field(row, ColumnRole::Size)?);

        if base_reference.is_empty() || color_key.is_empty() || size.is_empty() {
            return None;
        }

        Some(Self {
            base_reference,
            color,
            color_key,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stock_record_normalizes_fields() {
        let columns = ColumnMap::positional(ColumnRole::STOCK);
        let record =
            StockRecord::from_row(&row(&["NS221AX", "Forest  Green", "2xl", "8"]), &columns)
                .unwrap();

        assert_eq!(record.base_reference, "NS221");
        assert_eq!(record.color, "Forest Green");
        assert_eq!(record.color_key, "forestgreen");
        assert_eq!(record.size, "XXL");
        assert_eq!(record.quantity, 8);
    }

    #[test]
    fn test_stock_record_missing_quantity_is_zero() {
        let columns = ColumnMap::positional(ColumnRole::STOCK);
        let record = StockRecord::from_row(&row(&["NS221A", "Navy", "S"]), &columns).unwrap();
        assert_eq!(record.quantity, 0);
    }

    #[test]
    fn test_rows_missing_required_fields_are_rejected() {
        let columns = ColumnMap::positional(ColumnRole::STOCK);
        assert!(StockRecord::from_row(&row(&["NS221A", "Navy"]), &columns).is_none());
        assert!(StockRecord::from_row(&row(&["", "Navy", "S", "1"]), &columns).is_none());
        assert!(StockRecord::from_row(&row(&["NS221A", "--", "S", "1"]), &columns).is_none());
        assert!(StockRecord::from_row(&row(&["NS221A", "Navy", "", "1"]), &columns).is_none());
    }

    #[test]
    fn test_replenishment_record_blank_date() {
        let columns = ColumnMap::positional(ColumnRole::REPLENISHMENT);
        let record =
            ReplenishmentRecord::from_row(&row(&["NS221A", "Écru", "m", "", "4"]), &columns)
                .unwrap();

        assert_eq!(record.color_key, "ecru");
        assert_eq!(record.size, "M");
        assert_eq!(record.receive_date, "-");
        assert_eq!(record.quantity, 4);
    }
}
