//! Delimited-text parser with semicolon/comma detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RestockError, Result};
use super::source::DataTable;

/// Delimiters considered when auto-detecting.
const DELIMITERS: &[u8] = &[b';', b','];

/// Default number of leading characters inspected for delimiter detection.
pub const DEFAULT_SNIFF_LEN: usize = 1000;

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Number of leading characters inspected when auto-detecting.
    pub sniff_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            sniff_len: DEFAULT_SNIFF_LEN,
        }
    }
}

impl ParserConfig {
    /// Check that a configured delimiter can split records.
    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.delimiter {
            if !d.is_ascii() || d.is_ascii_alphanumeric() || matches!(d, b'\n' | b'\r' | b' ') {
                return Err(RestockError::Config(format!(
                    "unsupported delimiter {:?}",
                    d as char
                )));
            }
        }
        if self.sniff_len == 0 {
            return Err(RestockError::Config("sniff_len must be positive".to_string()));
        }
        Ok(())
    }
}

/// Splits raw document text into trimmed fields.
///
/// No quoting is recognized: a delimiter inside a field always splits it.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a whole document.
    ///
    /// Blank lines are dropped and every field is trimmed. An empty document
    /// yields an empty table rather than an error.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(text, self.config.sniff_len),
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            delimiter = %(delimiter as char),
            rows = rows.len(),
            "parsed document"
        );

        Ok(DataTable::new(rows, delimiter))
    }
}

/// Pick the field separator from the first `sniff_len` characters.
///
/// Semicolon wins on a tie, including when neither character appears.
pub fn detect_delimiter(text: &str, sniff_len: usize) -> u8 {
    let mut counts = [0usize; DELIMITERS.len()];
    for ch in text.chars().take(sniff_len) {
        if let Some(i) = DELIMITERS.iter().position(|&d| d as char == ch) {
            counts[i] += 1;
        }
    }

    let (semicolons, commas) = (counts[0], counts[1]);
    if semicolons >= commas { b';' } else { b',' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("ref;color;size\nA1;Red;S", 1000), b';');
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("ref,color,size\nA1,Red,S", 1000), b',');
    }

    #[test]
    fn test_detect_delimiter_tie_prefers_semicolon() {
        assert_eq!(detect_delimiter("a;b,c", 1000), b';');
        assert_eq!(detect_delimiter("", 1000), b';');
    }

    #[test]
    fn test_detect_delimiter_only_inspects_prefix() {
        let text = format!("a;b\n{}", ",".repeat(50));
        assert_eq!(detect_delimiter(&text, 4), b';');
        assert_eq!(detect_delimiter(&text, 1000), b',');
    }

    #[test]
    fn test_parse_drops_blank_lines_and_trims() {
        let parser = Parser::new();
        let table = parser
            .parse_str("ref ; color\r\n\r\n  \nNS221A; Forest Green \rNS300;Navy\n")
            .unwrap();

        assert_eq!(table.delimiter, b';');
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.get(1, 0), Some("NS221A"));
        assert_eq!(table.get(1, 1), Some("Forest Green"));
        assert_eq!(table.get(2, 1), Some("Navy"));
    }

    #[test]
    fn test_parse_ignores_quotes() {
        let parser = Parser::new();
        let table = parser.parse_str("a,\"b,c\"\n").unwrap();
        assert_eq!(table.rows[0], vec!["a", "\"b", "c\""]);
    }

    #[test]
    fn test_parse_empty_document() {
        let table = Parser::new().parse_str("\n\n").unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_configured_delimiter_overrides_detection() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: Some(b','),
            ..ParserConfig::default()
        });
        let table = parser.parse_str("a;b,c\n").unwrap();
        assert_eq!(table.rows[0], vec!["a;b", "c"]);
    }

    #[test]
    fn test_validate_rejects_bad_delimiter() {
        let config = ParserConfig {
            delimiter: Some(b'x'),
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(ParserConfig::default().validate().is_ok());
    }
}
