//! Restock: stock and replenishment lookups over ragged flat-text exports.
//!
//! Two exports feed the catalog: on-hand stock and scheduled replenishment.
//! Both are keyed by product reference, color and size, and both are messy:
//! headers come in English or French, fields are split by `;` or `,`,
//! references carry variant suffixes, colors differ by accent and case, sizes
//! have synonyms and dates come in two formats.
//!
//! # Pipeline
//!
//! - **Parse**: detect the delimiter and split lines into trimmed fields
//! - **Map**: find the column for each role, or fall back to fixed positions
//! - **Normalize**: canonical reference, color key, size and quantity per row
//! - **Aggregate**: sum quantities into lookup maps, built once per document
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use restock::{Catalog, FileSource};
//!
//! # async fn run() -> restock::Result<()> {
//! let catalog = Catalog::new(Arc::new(FileSource::new("exports")));
//!
//! for reference in catalog.unique_refs().await? {
//!     println!("{}: {:?}", reference, catalog.colors_for(&reference).await?);
//! }
//! println!("{}", catalog.stock("NS221AX", "Forest Green", "2xl").await?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod input;
pub mod loader;
pub mod normalize;
pub mod schema;

mod catalog;

pub use crate::catalog::{Catalog, SizeAvailability};
pub use config::CatalogConfig;
pub use error::{RestockError, Result};
pub use index::{Delivery, Replenishment, ReplenishmentIndex, StockIndex};
pub use input::{DocumentSource, FileSource, HttpSource, MemorySource, SourceMetadata};
pub use loader::{IndexLoader, LoadedIndex};
pub use schema::{ColumnRole, HeaderLayout, LayoutKind};
