//! Single-flight loading of a document into its index.

use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell, RwLock};
use tracing::{debug, info, warn};

use crate::error::{RestockError, Result};
use crate::index::{DocumentIndex, build_index};
use crate::input::{DocumentSource, Parser, SourceMetadata};

/// A built index together with what it was built from.
#[derive(Debug)]
pub struct LoadedIndex<T> {
    pub index: T,
    pub metadata: SourceMetadata,
}

/// Outcome of one load attempt, shared by everyone who waited on it.
type Attempt<T> = OnceCell<std::result::Result<Arc<LoadedIndex<T>>, Arc<RestockError>>>;

/// Fetches one resource and builds its index at most once.
///
/// Callers that arrive while a load is running wait on that load instead of
/// starting their own fetch, and all of them get its outcome, success or
/// failure. A failure is not kept: the first call after it starts a new
/// attempt.
pub struct IndexLoader<T: DocumentIndex> {
    source: Arc<dyn DocumentSource>,
    resource: String,
    parser: Parser,
    attempt: RwLock<Arc<Attempt<T>>>,
    reload_guard: Mutex<()>,
}

impl<T: DocumentIndex> IndexLoader<T> {
    pub fn new(source: Arc<dyn DocumentSource>, resource: impl Into<String>, parser: Parser) -> Self {
        Self {
            source,
            resource: resource.into(),
            parser,
            attempt: RwLock::new(Arc::new(OnceCell::new())),
            reload_guard: Mutex::new(()),
        }
    }

    /// The index, loading it on first use.
    pub async fn get(&self) -> Result<Arc<LoadedIndex<T>>> {
        let mut attempt = Arc::clone(&*self.attempt.read().await);
        if matches!(attempt.get(), Some(Err(_))) {
            attempt = self.retry(&attempt).await;
        }
        self.settle(&attempt).await
    }

    /// Discard the current index and build a new one.
    ///
    /// Queries issued during the reload wait for it. Readers holding the old
    /// `Arc` keep their snapshot.
    pub async fn reload(&self) -> Result<Arc<LoadedIndex<T>>> {
        let _guard = self.reload_guard.lock().await;
        let attempt = Arc::new(OnceCell::new());
        *self.attempt.write().await = Arc::clone(&attempt);
        debug!(kind = T::KIND, resource = %self.resource, "reloading");
        self.settle(&attempt).await
    }

    /// Replace a failed attempt with a fresh one, unless someone already did.
    async fn retry(&self, failed: &Arc<Attempt<T>>) -> Arc<Attempt<T>> {
        let mut current = self.attempt.write().await;
        if Arc::ptr_eq(&*current, failed) {
            debug!(kind = T::KIND, resource = %self.resource, "retrying failed load");
            *current = Arc::new(OnceCell::new());
        }
        Arc::clone(&*current)
    }

    async fn settle(&self, attempt: &Attempt<T>) -> Result<Arc<LoadedIndex<T>>> {
        attempt
            .get_or_init(|| async {
                self.load().await.map_err(|e| {
                    warn!(kind = T::KIND, resource = %self.resource, error = %e, "load failed");
                    Arc::new(e)
                })
            })
            .await
            .clone()
            .map_err(RestockError::Shared)
    }

    async fn load(&self) -> Result<Arc<LoadedIndex<T>>> {
        debug!(
            kind = T::KIND,
            resource = %self.resource,
            source = self.source.name(),
            "fetching"
        );
        let text = self.source.fetch(&self.resource).await?;
        let table = self.parser.parse_str(&text)?;
        let outcome = build_index::<T>(&table);

        let metadata = SourceMetadata::new(
            self.resource.as_str(),
            &text,
            &table,
            outcome.layout,
            outcome.records,
        );

        info!(
            kind = T::KIND,
            resource = %self.resource,
            format = %metadata.format,
            layout = ?metadata.layout,
            records = outcome.records,
            "index built"
        );

        Ok(Arc::new(LoadedIndex {
            index: outcome.index,
            metadata,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::StockIndex;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first fetch, then serves a small stock export.
    struct FlakySource {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl DocumentSource for FlakySource {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn fetch(&self, resource: &str) -> Result<String> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(RestockError::unavailable(resource, "connection reset"));
            }
            Ok("ref;color;size;qty\nA1;Red;S;4\n".to_string())
        }
    }

    #[tokio::test]
    async fn test_failed_load_is_retried_on_next_call() {
        let source = Arc::new(FlakySource {
            fetches: AtomicUsize::new(0),
        });
        let loader: IndexLoader<StockIndex> =
            IndexLoader::new(source.clone(), "STOCKWEB.csv", Parser::new());

        let err = loader.get().await.unwrap_err();
        assert!(matches!(err, RestockError::Shared(_)));
        assert!(err.is_unavailable());

        let loaded = loader.get().await.unwrap();
        assert_eq!(loaded.index.stock("A1", "Red", "S"), 4);
        loader.get().await.unwrap();
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }
}
