//! Catalog configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RestockError, Result};
use crate::input::ParserConfig;

/// Default resource name of the stock export.
pub const DEFAULT_STOCK_RESOURCE: &str = "STOCKWEB.csv";

/// Default resource name of the replenishment export.
pub const DEFAULT_REPLENISHMENT_RESOURCE: &str = "REAPPROWEB.csv";

/// Configuration for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Resource holding on-hand stock.
    pub stock_resource: String,
    /// Resource holding scheduled replenishments.
    pub replenishment_resource: String,
    /// Parser settings shared by both documents.
    pub parser: ParserConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stock_resource: DEFAULT_STOCK_RESOURCE.to_string(),
            replenishment_resource: DEFAULT_REPLENISHMENT_RESOURCE.to_string(),
            parser: ParserConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RestockError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CatalogConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the stock resource name.
    pub fn with_stock_resource(mut self, resource: impl Into<String>) -> Self {
        self.stock_resource = resource.into();
        self
    }

    /// Set the replenishment resource name.
    pub fn with_replenishment_resource(mut self, resource: impl Into<String>) -> Self {
        self.replenishment_resource = resource.into();
        self
    }

    /// Force a delimiter instead of detecting it.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.parser.delimiter = Some(delimiter);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.stock_resource.trim().is_empty() {
            return Err(RestockError::Config("stock_resource is empty".to_string()));
        }
        if self.replenishment_resource.trim().is_empty() {
            return Err(RestockError::Config(
                "replenishment_resource is empty".to_string(),
            ));
        }
        self.parser.validate()
    }
}
