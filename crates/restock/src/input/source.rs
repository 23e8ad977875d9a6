//! Parsed documents and their metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::schema::LayoutKind;

/// Metadata about a loaded source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Resource name the document was fetched under.
    pub resource: String,
    /// SHA-256 hash of the raw text.
    pub hash: String,
    /// Document size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, csv-semicolon).
    pub format: String,
    /// How columns were mapped to roles.
    pub layout: LayoutKind,
    /// Number of records that made it into the index.
    pub record_count: usize,
    /// When the document was indexed.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe a document that has just been indexed.
    pub fn new(
        resource: impl Into<String>,
        text: &str,
        table: &DataTable,
        layout: LayoutKind,
        record_count: usize,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            resource: resource.into(),
            hash,
            size_bytes: text.len() as u64,
            format: table.format().to_string(),
            layout,
            record_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Rows of trimmed fields, header row included if the document has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    /// Non-blank rows in document order.
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self { rows, delimiter }
    }

    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the document had no non-blank lines.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row, used for header detection.
    pub fn first_row(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Format name derived from the delimiter.
    pub fn format(&self) -> &'static str {
        match self.delimiter {
            b',' => "csv",
            b';' => "csv-semicolon",
            b'\t' => "tsv",
            b'|' => "psv",
            _ => "delimited",
        }
    }
}
