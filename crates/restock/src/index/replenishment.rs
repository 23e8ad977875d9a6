//! Scheduled replenishment index.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::DocumentIndex;
use super::record::ReplenishmentRecord;
use crate::normalize::{
    NO_DATE, base_reference, canonical_size, color_key, date_sort_key, is_unknown_date,
};
use crate::schema::{ColumnMap, ColumnRole};

/// Incoming quantity expected on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Receive date as written in the export, or `-` when unknown.
    pub date: String,
    pub quantity: u64,
}

/// Total incoming quantity with the earliest known receive date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replenishment {
    /// Earliest parseable date, or `-` when none of the deliveries has one.
    pub date: String,
    pub quantity: u64,
}

impl Replenishment {
    /// Aggregate a date-ascending schedule. `None` if it is empty.
    pub fn from_schedule(schedule: &[Delivery]) -> Option<Self> {
        if schedule.is_empty() {
            return None;
        }
        let date = schedule
            .iter()
            .map(|d| d.date.as_str())
            .find(|d| !is_unknown_date(d))
            .unwrap_or(NO_DATE)
            .to_string();
        let quantity = schedule
            .iter()
            .fold(0u64, |total, d| total.saturating_add(d.quantity));
        Some(Self { date, quantity })
    }

    /// Whether a real receive date is known.
    pub fn has_date(&self) -> bool {
        !is_unknown_date(&self.date)
    }
}

type GroupKey = (String, String, String);

/// Sort key first so iteration is date-ascending with unknown dates last;
/// the raw string keeps distinct spellings of unparseable dates apart.
type DateSlot = (u32, String);

/// Replenishments grouped by reference, color key and size, then by date.
#[derive(Debug, Clone, Default)]
pub struct ReplenishmentIndex {
    groups: HashMap<GroupKey, BTreeMap<DateSlot, u64>>,
}

impl ReplenishmentIndex {
    /// Date-ascending deliveries for a key, same-date quantities summed.
    pub fn schedule(&self, reference: &str, color: &str, size: &str) -> Vec<Delivery> {
        let key = (
            base_reference(reference),
            color_key(color),
            canonical_size(size),
        );
        self.groups
            .get(&key)
            .map(|dates| {
                dates
                    .iter()
                    .map(|((_, date), quantity)| Delivery {
                        date: date.clone(),
                        quantity: *quantity,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Aggregate over [`schedule`](Self::schedule).
    pub fn summary(&self, reference: &str, color: &str, size: &str) -> Option<Replenishment> {
        Replenishment::from_schedule(&self.schedule(reference, color, size))
    }

    /// Number of (reference, color, size) groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl DocumentIndex for ReplenishmentIndex {
    type Record = ReplenishmentRecord;

    const KIND: &'static str = "replenishment";
    const ROLES: &'static [ColumnRole] = ColumnRole::REPLENISHMENT;

    fn record(row: &[String], columns: &ColumnMap) -> Option<ReplenishmentRecord> {
        ReplenishmentRecord::from_row(row, columns)
    }

    fn insert(&mut self, record: ReplenishmentRecord) {
        let slot = (date_sort_key(&record.receive_date), record.receive_date);
        let total = self
            .groups
            .entry((record.base_reference, record.color_key, record.size))
            .or_default()
            .entry(slot)
            .or_insert(0);
        *total = total.saturating_add(record.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::input::Parser;

    const HEADER: &str = "REF;COLOR;SIZE;DATE TO RECEIVE;QUANTITY\n";

    fn index(rows: &str) -> ReplenishmentIndex {
        let table = Parser::new().parse_str(&format!("{}{}", HEADER, rows)).unwrap();
        build_index::<ReplenishmentIndex>(&table).index
    }

    fn delivery(date: &str, quantity: u64) -> Delivery {
        Delivery {
            date: date.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_schedule_sorted_by_date() {
        let idx = index("NS221A;Forest Green;S;15/03/2025;5\nNS221AX;Forest Green;S;01/02/2025;3\n");

        assert_eq!(
            idx.schedule("NS221", "Forest Green", "S"),
            vec![delivery("01/02/2025", 3), delivery("15/03/2025", 5)]
        );
        assert_eq!(
            idx.summary("NS221", "Forest Green", "S"),
            Some(Replenishment {
                date: "01/02/2025".to_string(),
                quantity: 8,
            })
        );
    }

    #[test]
    fn test_same_date_rows_merge() {
        let idx = index("A1;Red;M;2025-04-01;2\nA1;Red;M;2025-04-01;6\nA1;red;m;-;1\n");
        assert_eq!(
            idx.schedule("A1", "RED", "M"),
            vec![delivery("2025-04-01", 8), delivery("-", 1)]
        );
    }

    #[test]
    fn test_unknown_dates_sort_last() {
        let idx = index("A1;Red;M;;4\nA1;Red;M;soon;2\nA1;Red;M;31/12/2030;1\nA1;Red;M;2025-01-10;7\n");
        let dates: Vec<String> = idx
            .schedule("A1", "Red", "M")
            .into_iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(dates, vec!["2025-01-10", "31/12/2030", "-", "soon"]);
    }

    #[test]
    fn test_summary_without_known_date() {
        let idx = index("A1;Red;M;-;4\nA1;Red;M;tbc;2\n");
        let summary = idx.summary("A1", "Red", "M").unwrap();
        assert_eq!(summary.date, "-");
        assert_eq!(summary.quantity, 6);
        assert!(!summary.has_date());
    }

    #[test]
    fn test_short_year_is_not_the_earliest_date() {
        let idx = index("A1;Red;M;01/06/2025;3\nA1;Red;M;01/02/25;2\n");
        let summary = idx.summary("A1", "Red", "M").unwrap();
        assert_eq!(summary.date, "01/06/2025");
        assert_eq!(summary.quantity, 5);
        assert_eq!(idx.schedule("A1", "Red", "M").last().unwrap().date, "01/02/25");
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let idx = index(&format!(
            "A1;Red;M;01/06/2025;{max}\nA1;Red;M;01/06/2025;{max}\nA1;Red;M;-;{max}\n",
            max = i64::MAX
        ));
        assert_eq!(idx.schedule("A1", "Red", "M")[0].quantity, u64::MAX - 1);
        assert_eq!(idx.summary("A1", "Red", "M").unwrap().quantity, u64::MAX);
    }

    #[test]
    fn test_accent_insensitive_color_match() {
        let idx = index("A1;Bleu Marine;XXS;01/05/2025;3\n");
        assert_eq!(idx.schedule("A1", "bleu-marine", "2XS").len(), 1);
        assert_eq!(idx.schedule("A1", "BLEU MARINÉ", "xxs").len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let idx = index("A1;Red;M;01/05/2025;3\n");
        assert!(idx.schedule("A1", "Red", "L").is_empty());
        assert_eq!(idx.summary("B2", "Red", "M"), None);
    }

    #[test]
    fn test_comma_delimited_headerless() {
        let table = Parser::new()
            .parse_str("NS221A,Forest Green,S,15/03/2025,5\n")
            .unwrap();
        let idx = build_index::<ReplenishmentIndex>(&table).index;
        assert_eq!(
            idx.summary("NS221", "Forest Green", "S").map(|r| r.quantity),
            Some(5)
        );
    }
}
