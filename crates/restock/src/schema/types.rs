//! Column roles and layout outcomes.

use serde::{Deserialize, Serialize};

/// Semantic role of a column in a stock or replenishment export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Product reference, possibly carrying variant suffixes.
    Reference,
    /// Color name.
    Color,
    /// Size label.
    Size,
    /// On-hand or incoming quantity.
    Quantity,
    /// Date a replenishment is expected.
    ReceiveDate,
}

impl ColumnRole {
    /// Roles of a stock export, in positional order.
    pub const STOCK: &'static [ColumnRole] = &[
        ColumnRole::Reference,
        ColumnRole::Color,
        ColumnRole::Size,
        ColumnRole::Quantity,
    ];

    /// Roles of a replenishment export, in positional order.
    pub const REPLENISHMENT: &'static [ColumnRole] = &[
        ColumnRole::Reference,
        ColumnRole::Color,
        ColumnRole::Size,
        ColumnRole::ReceiveDate,
        ColumnRole::Quantity,
    ];

    /// Header names that identify this role when matched exactly.
    pub fn exact_names(&self) -> &'static [&'static str] {
        match self {
            ColumnRole::Reference => &["ref", "reference", "référence"],
            ColumnRole::Color => &["color", "colour", "couleur"],
            ColumnRole::Size => &["size", "taille"],
            ColumnRole::Quantity => &["stock", "qty", "quantity", "quantité"],
            ColumnRole::ReceiveDate => &["date to receive", "date_to_receive", "datetorec"],
        }
    }

    /// Substrings that identify this role when no header matches exactly.
    fn fragments(&self) -> &'static [&'static str] {
        match self {
            ColumnRole::Reference => &["ref"],
            ColumnRole::Color => &["color", "colour", "couleur"],
            ColumnRole::Size => &["size", "taille"],
            ColumnRole::Quantity => &["quantity", "qty", "quantit", "stock"],
            ColumnRole::ReceiveDate => &["date to receive", "date_to_receive", "datetorec"],
        }
    }

    /// Whether a normalized header matches one of this role's exact names.
    pub fn matches_exactly(&self, header: &str) -> bool {
        self.exact_names().contains(&header)
    }

    /// Whether a normalized header contains one of this role's fragments.
    pub fn matches_loosely(&self, header: &str) -> bool {
        if self.fragments().iter().any(|f| header.contains(f)) {
            return true;
        }
        match self {
            ColumnRole::ReceiveDate => {
                header.contains("date") && (header.contains("receive") || header.contains("rec"))
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnRole::Reference => "reference",
            ColumnRole::Color => "color",
            ColumnRole::Size => "size",
            ColumnRole::Quantity => "quantity",
            ColumnRole::ReceiveDate => "receive date",
        };
        f.write_str(name)
    }
}

/// Which path header detection took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Every role was found in the first row.
    ByHeader,
    /// At least one role was missing; columns are read by position.
    Positional,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names() {
        assert!(ColumnRole::Reference.matches_exactly("référence"));
        assert!(ColumnRole::Quantity.matches_exactly("qty"));
        assert!(!ColumnRole::Quantity.matches_exactly("qty available"));
    }

    #[test]
    fn test_loose_matching() {
        assert!(ColumnRole::Reference.matches_loosely("product ref"));
        assert!(ColumnRole::Color.matches_loosely("color name"));
        assert!(ColumnRole::Quantity.matches_loosely("quantité dispo"));
        assert!(ColumnRole::ReceiveDate.matches_loosely("expected date to receive"));
        assert!(ColumnRole::ReceiveDate.matches_loosely("date rec."));
        assert!(!ColumnRole::ReceiveDate.matches_loosely("date"));
        assert!(!ColumnRole::Size.matches_loosely("colour"));
    }
}
