//! Retrieval of raw document text.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::{RestockError, Result};

/// Something that can hand back the raw text of a named resource.
///
/// Every failure is reported as [`RestockError::ResourceUnavailable`].
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetch the full text of `resource`.
    async fn fetch(&self, resource: &str) -> Result<String>;
}

/// Reads resources as files under a root directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, resource: &str) -> Result<String> {
        let path = self.root.join(resource);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RestockError::unavailable(resource, format!("{}: {}", path.display(), e)))
    }
}

/// Fetches resources relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source rooted at `base_url`.
    ///
    /// A trailing slash is added if missing so resource names are appended to
    /// the path instead of replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized)
            .map_err(|e| RestockError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
        Ok(Self {
            base,
            client: reqwest::Client::new(),
        })
    }

    /// Full URL a resource resolves to. Spaces and other reserved characters
    /// in the name are percent-encoded.
    pub fn url_for(&self, resource: &str) -> Result<Url> {
        self.base
            .join(resource)
            .map_err(|e| RestockError::unavailable(resource, e))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, resource: &str) -> Result<String> {
        let url = self.url_for(resource)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RestockError::unavailable(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RestockError::unavailable(
                resource,
                format!("{} returned HTTP {}", url, status),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| RestockError::unavailable(resource, e))
    }
}

/// In-process documents keyed by resource name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn with_document(mut self, resource: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(resource.into(), text.into());
        self
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(&self, resource: &str) -> Result<String> {
        self.documents
            .get(resource)
            .cloned()
            .ok_or_else(|| RestockError::unavailable(resource, "no such document"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with_document("stock.csv", "ref;color\n");
        assert_eq!(source.fetch("stock.csv").await.unwrap(), "ref;color\n");

        let err = source.fetch("missing.csv").await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("missing.csv"));
    }

    #[tokio::test]
    async fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("stock.csv")).unwrap();
        file.write_all(b"ref;color\n").unwrap();

        let source = FileSource::new(dir.path());
        assert_eq!(source.fetch("stock.csv").await.unwrap(), "ref;color\n");
        assert!(source.fetch("nope.csv").await.unwrap_err().is_unavailable());
    }

    #[test]
    fn test_http_url_encoding() {
        let source = HttpSource::new("https://files.example.com/documents").unwrap();
        let url = source.url_for("REAPPRO (2).csv").unwrap();
        assert_eq!(
            url.as_str(),
            "https://files.example.com/documents/REAPPRO%20(2).csv"
        );
    }

    #[test]
    fn test_http_rejects_bad_base() {
        assert!(HttpSource::new("not a url").is_err());
    }
}
