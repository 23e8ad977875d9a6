//! Header detection: map the first row onto column roles.

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::types::{ColumnRole, LayoutKind};

/// Column index for each role.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnMap {
    indices: IndexMap<ColumnRole, usize>,
}

impl ColumnMap {
    /// Map roles to columns in the order given.
    pub fn positional(roles: &[ColumnRole]) -> Self {
        Self {
            indices: roles.iter().enumerate().map(|(i, r)| (*r, i)).collect(),
        }
    }

    /// Column index for a role.
    pub fn get(&self, role: ColumnRole) -> Option<usize> {
        self.indices.get(&role).copied()
    }

    /// Cell for a role in a row, if the row is long enough.
    pub fn field<'a>(&self, row: &'a [String], role: ColumnRole) -> Option<&'a str> {
        self.get(role).and_then(|i| row.get(i)).map(String::as_str)
    }
}

/// Outcome of header detection.
///
/// A document whose first row names every required role is read by header;
/// anything else is read as headerless with roles in fixed positional order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLayout {
    /// The first row is a header and was fully matched.
    ByHeader(ColumnMap),
    /// No usable header; every row is data.
    Positional(ColumnMap),
}

impl HeaderLayout {
    /// Detect the layout from the first row of a document.
    ///
    /// `roles` lists the required roles in the positional order used when
    /// the header cannot be matched.
    pub fn detect(first_row: &[String], roles: &[ColumnRole]) -> Self {
        let headers: Vec<String> = first_row.iter().map(|h| normalize_header(h)).collect();

        let mut indices = IndexMap::new();
        let mut missing = Vec::new();
        for &role in roles {
            match find_column(&headers, role) {
                Some(i) => {
                    indices.insert(role, i);
                }
                None => missing.push(role),
            }
        }

        if missing.is_empty() {
            debug!(?indices, "matched header row");
            HeaderLayout::ByHeader(ColumnMap { indices })
        } else {
            let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
            warn!(
                missing = %missing.join(", "),
                "header incomplete, reading columns by position"
            );
            HeaderLayout::Positional(ColumnMap::positional(roles))
        }
    }

    /// Role-to-column mapping for data rows.
    pub fn columns(&self) -> &ColumnMap {
        match self {
            HeaderLayout::ByHeader(map) | HeaderLayout::Positional(map) => map,
        }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            HeaderLayout::ByHeader(_) => LayoutKind::ByHeader,
            HeaderLayout::Positional(_) => LayoutKind::Positional,
        }
    }

    /// Index of the first data row.
    pub fn data_start(&self) -> usize {
        match self {
            HeaderLayout::ByHeader(_) => 1,
            HeaderLayout::Positional(_) => 0,
        }
    }
}

/// Lowercase, trim and collapse inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Exact names across the whole row win over substring matches.
fn find_column(headers: &[String], role: ColumnRole) -> Option<usize> {
    headers
        .iter()
        .position(|h| role.matches_exactly(h))
        .or_else(|| headers.iter().position(|h| role.matches_loosely(h)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_english_header() {
        let layout = HeaderLayout::detect(
            &row(&["Reference", "Color", "Size", "Stock"]),
            ColumnRole::STOCK,
        );
        assert_eq!(layout.kind(), LayoutKind::ByHeader);
        assert_eq!(layout.data_start(), 1);
        assert_eq!(layout.columns().get(ColumnRole::Quantity), Some(3));
    }

    #[test]
    fn test_detect_french_header_any_order() {
        let layout = HeaderLayout::detect(
            &row(&["Quantité", "Taille", "Couleur", "Référence"]),
            ColumnRole::STOCK,
        );
        let cols = layout.columns();
        assert_eq!(layout.kind(), LayoutKind::ByHeader);
        assert_eq!(cols.get(ColumnRole::Reference), Some(3));
        assert_eq!(cols.get(ColumnRole::Color), Some(2));
        assert_eq!(cols.get(ColumnRole::Size), Some(1));
        assert_eq!(cols.get(ColumnRole::Quantity), Some(0));
    }

    #[test]
    fn test_exact_match_preferred_over_substring() {
        // "supplier ref" contains "ref" but "ref" matches exactly.
        let layout = HeaderLayout::detect(
            &row(&["supplier ref", "ref", "color", "size", "qty"]),
            ColumnRole::STOCK,
        );
        assert_eq!(layout.columns().get(ColumnRole::Reference), Some(1));
    }

    #[test]
    fn test_detect_replenishment_header() {
        let layout = HeaderLayout::detect(
            &row(&["REF", "COLOR", "SIZE", "DATE  TO RECEIVE", "QUANTITY"]),
            ColumnRole::REPLENISHMENT,
        );
        assert_eq!(layout.kind(), LayoutKind::ByHeader);
        assert_eq!(layout.columns().get(ColumnRole::ReceiveDate), Some(3));
        assert_eq!(layout.columns().get(ColumnRole::Quantity), Some(4));
    }

    #[test]
    fn test_missing_role_falls_back_to_positional() {
        let layout = HeaderLayout::detect(
            &row(&["NS221A", "Forest Green", "S", "12"]),
            ColumnRole::STOCK,
        );
        assert_eq!(layout.kind(), LayoutKind::Positional);
        assert_eq!(layout.data_start(), 0);
        assert_eq!(layout.columns().get(ColumnRole::Size), Some(2));
    }

    #[test]
    fn test_stock_header_without_date_is_positional_for_replenishment() {
        let layout = HeaderLayout::detect(
            &row(&["ref", "color", "size", "qty"]),
            ColumnRole::REPLENISHMENT,
        );
        assert_eq!(layout.kind(), LayoutKind::Positional);
        assert_eq!(layout.columns().get(ColumnRole::ReceiveDate), Some(3));
    }

    #[test]
    fn test_field_lookup_short_row() {
        let map = ColumnMap::positional(ColumnRole::STOCK);
        let short = row(&["NS221A", "Navy"]);
        assert_eq!(map.field(&short, ColumnRole::Color), Some("Navy"));
        assert_eq!(map.field(&short, ColumnRole::Size), None);
    }
}
