//! Single-slot cache for the computed catalog

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::catalog::aggregator::aggregate;
use crate::catalog::error::FeedError;
use crate::catalog::feed::{Feed, fetch_all};
use crate::catalog::types::CatalogEntry;

/// Immutable view of a computed catalog
pub type Catalog = Arc<[CatalogEntry]>;

/// Holds the last successfully computed catalog.
///
/// The slot lock is held for the whole recomputation, so at most one feed
/// walk runs at a time. Callers arriving meanwhile wait for it and then see
/// the refreshed slot.
pub struct CatalogCache {
    feed: Arc<dyn Feed>,
    slot: Mutex<Option<Catalog>>,
}

impl CatalogCache {
    pub fn new(feed: Arc<dyn Feed>) -> Self {
        Self {
            feed,
            slot: Mutex::new(None),
        }
    }

    /// Return the catalog, recomputing it when empty or when `force_reload` is set.
    ///
    /// On failure the previous catalog stays in place and the error is returned.
    pub async fn get(&self, force_reload: bool) -> Result<Catalog, FeedError> {
        let mut slot = self.slot.lock().await;

        if !force_reload {
            if let Some(catalog) = slot.as_ref().filter(|catalog| !catalog.is_empty()) {
                debug!("Using cached catalog with {} entries", catalog.len());
                return Ok(Arc::clone(catalog));
            }
        }

        info!("Recomputing catalog (force_reload: {})", force_reload);
        let records = fetch_all(self.feed.as_ref())
            .await
            .inspect_err(|e| warn!("Failed to fetch index builds: {}", e))?;
        let record_count = records.len();

        let catalog: Catalog = aggregate(records).into();
        info!(
            "Computed {} catalog entries from {} messages",
            catalog.len(),
            record_count
        );

        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Current catalog without contacting the feed
    pub async fn snapshot(&self) -> Option<Catalog> {
        self.slot.lock().await.clone()
    }
}
