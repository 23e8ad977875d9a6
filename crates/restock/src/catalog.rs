//! Query API over the stock and replenishment indices.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::index::{Delivery, Replenishment, ReplenishmentIndex, StockIndex};
use crate::input::{DocumentSource, Parser, SourceMetadata};
use crate::loader::{IndexLoader, LoadedIndex};

/// Stock and incoming quantity for one size of a reference/color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeAvailability {
    pub size: String,
    pub stock: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replenishment: Option<Replenishment>,
}

impl SizeAvailability {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Read-only lookups over both exports.
///
/// Each document is fetched and indexed on the first query that needs it and
/// kept for the lifetime of the catalog. All lookups accept raw user input:
/// references are reduced to their base, colors matched on their key, sizes
/// canonicalized. Unknown keys give empty results, never errors.
pub struct Catalog {
    config: CatalogConfig,
    stock: IndexLoader<StockIndex>,
    replenishment: IndexLoader<ReplenishmentIndex>,
}

impl Catalog {
    /// Create a catalog with default configuration.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self::build(source, CatalogConfig::default())
    }

    /// Create a catalog with custom configuration.
    pub fn with_config(source: Arc<dyn DocumentSource>, config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(source, config))
    }

    fn build(source: Arc<dyn DocumentSource>, config: CatalogConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            stock: IndexLoader::new(Arc::clone(&source), &config.stock_resource, parser.clone()),
            replenishment: IndexLoader::new(source, &config.replenishment_resource, parser),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The stock index, loading it on first use.
    pub async fn load_stock(&self) -> Result<Arc<LoadedIndex<StockIndex>>> {
        self.stock.get().await
    }

    /// The replenishment index, loading it on first use.
    pub async fn load_replenishment(&self) -> Result<Arc<LoadedIndex<ReplenishmentIndex>>> {
        self.replenishment.get().await
    }

    /// Fetch and rebuild both indices.
    pub async fn reload(&self) -> Result<()> {
        tokio::try_join!(self.stock.reload(), self.replenishment.reload())?;
        Ok(())
    }

    /// All base references in the stock export, sorted.
    pub async fn unique_refs(&self) -> Result<Vec<String>> {
        Ok(self.load_stock().await?.index.unique_refs())
    }

    /// Colors stocked for a reference.
    pub async fn colors_for(&self, reference: &str) -> Result<Vec<String>> {
        Ok(self.load_stock().await?.index.colors_for(reference))
    }

    /// Sizes stocked for a reference and color, in canonical order.
    pub async fn sizes_for(&self, reference: &str, color: &str) -> Result<Vec<String>> {
        Ok(self.load_stock().await?.index.sizes_for(reference, color))
    }

    /// On-hand quantity, 0 when the key is unknown.
    pub async fn stock(&self, reference: &str, color: &str, size: &str) -> Result<u64> {
        Ok(self.load_stock().await?.index.stock(reference, color, size))
    }

    /// Every scheduled delivery for a key, earliest first, undated last.
    pub async fn replenishment_schedule(
        &self,
        reference: &str,
        color: &str,
        size: &str,
    ) -> Result<Vec<Delivery>> {
        Ok(self
            .load_replenishment()
            .await?
            .index
            .schedule(reference, color, size))
    }

    /// Total incoming quantity and earliest known date, `None` if nothing is scheduled.
    pub async fn replenishment(
        &self,
        reference: &str,
        color: &str,
        size: &str,
    ) -> Result<Option<Replenishment>> {
        Ok(self
            .load_replenishment()
            .await?
            .index
            .summary(reference, color, size))
    }

    /// Stock and replenishment side by side for every size of a reference/color.
    pub async fn size_grid(&self, reference: &str, color: &str) -> Result<Vec<SizeAvailability>> {
        let (stock, replenishment) = tokio::try_join!(self.load_stock(), self.load_replenishment())?;

        Ok(stock
            .index
            .sizes_for(reference, color)
            .into_iter()
            .map(|size| SizeAvailability {
                stock: stock.index.stock(reference, color, &size),
                replenishment: replenishment.index.summary(reference, color, &size),
                size,
            })
            .collect())
    }

    /// Metadata of the stock document.
    pub async fn stock_metadata(&self) -> Result<SourceMetadata> {
        Ok(self.load_stock().await?.metadata.clone())
    }

    /// Metadata of the replenishment document.
    pub async fn replenishment_metadata(&self) -> Result<SourceMetadata> {
        Ok(self.load_replenishment().await?.metadata.clone())
    }
}
