//! Cache-first read coordinator for the catalog endpoints.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::cache::ResponseCache;
use crate::cache_key;
use crate::cache_ttl::CacheTtls;
use crate::error::ApiError;

use super::filter::ProductFilter;
use super::shape::{self, CategoryFacets, PagedResult, ProductRecord};
use super::store::ProductStore;

/// Orchestrates "check cache, on miss query the store, populate the cache".
///
/// Constructed once at startup from the shared store and cache handles and
/// cloned into every request. The cache is best-effort throughout: a failed
/// lookup counts as a miss, a failed population is logged and dropped, and
/// neither ever surfaces to the client. Concurrent misses for the same key
/// are not coalesced; each one queries the store independently.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
    cache: Arc<dyn ResponseCache>,
    ttls: CacheTtls,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>, cache: Arc<dyn ResponseCache>, ttls: CacheTtls) -> Self {
        Self { store, cache, ttls }
    }

    /// Collection read: cache hit short-circuits the store entirely; a miss
    /// runs the count query, then the data query over the same WHERE clause.
    #[instrument(skip(self, filter))]
    pub async fn list_products(&self, filter: ProductFilter) -> Result<PagedResult, ApiError> {
        let cache_key = cache_key::canonicalize("products", &filter.cache_params());

        if let Some(cached) = self.cache_lookup(&cache_key).await {
            return Ok(cached);
        }

        let total = self.store.count_products(&filter).await?;
        let rows = self.store.fetch_products(&filter).await?;
        let result = shape::paged(rows, total);

        self.populate(cache_key, &result, self.ttls.products);
        Ok(result)
    }

    /// Single-entity read keyed by the fixed `product:<id>` pattern.
    /// A not-found result is never cached.
    #[instrument(skip(self))]
    pub async fn product_by_id(&self, id: &str) -> Result<ProductRecord, ApiError> {
        let cache_key = cache_key::product_detail(id);

        if let Some(cached) = self.cache_lookup(&cache_key).await {
            return Ok(cached);
        }

        let record = self
            .store
            .fetch_product(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

        self.populate(cache_key, &record, self.ttls.product_detail);
        Ok(record)
    }

    /// Category facets: no caching and no parameters, just the union query
    /// regrouped by discriminator.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<CategoryFacets, ApiError> {
        let rows = self.store.fetch_categories().await?;
        Ok(shape::categories(rows))
    }

    /// Cache lookup treating every failure mode as a miss: backend errors are
    /// logged and swallowed, and an undeserializable entry is discarded.
    async fn cache_lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cached = match self.cache.get(key).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!("⚠️ Cache lookup failed for key {}: {}", key, e);
                return None;
            }
        };

        match cached {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(value) => {
                    info!("✅ Cache hit for key: {}", key);
                    Some(value)
                }
                Err(e) => {
                    warn!("Discarding undeserializable cache entry for key {}: {}", key, e);
                    None
                }
            },
            None => {
                info!("Cache miss for key: {}", key);
                None
            }
        }
    }

    /// Populate the cache on a detached task so it adds no latency to the
    /// miss path and its failure cannot fail the request.
    fn populate<T: Serialize>(&self, key: String, value: &T, ttl_seconds: u64) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ Skipping cache population for key {}: {}", key, e);
                return;
            }
        };

        let cache = self.cache.clone();
        tokio::spawn(async move {
            match cache.set_ex(&key, &payload, ttl_seconds).await {
                Ok(()) => debug!("Data cached for key: {}", key),
                Err(e) => warn!("⚠️ Cache population failed for key {}: {}", key, e),
            }
        });
    }
}
