//! Column roles and header detection.

mod header;
mod types;

pub use header::{ColumnMap, HeaderLayout, normalize_header};
pub use types::{ColumnRole, LayoutKind};
