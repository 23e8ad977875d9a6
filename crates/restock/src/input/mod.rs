//! Input parsing and document retrieval.

mod fetch;
mod parser;
mod source;

pub use fetch::{DocumentSource, FileSource, HttpSource, MemorySource};
pub use parser::{DEFAULT_SNIFF_LEN, Parser, ParserConfig, detect_delimiter};
pub use source::{DataTable, SourceMetadata};
