use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::RedisResponseCache;
use crate::cache_ttl::CacheTtls;
use crate::catalog::{CatalogService, PgProductStore};
use crate::config::{DatabaseConfig, RedisConfig};
use crate::db;

/// Estado compartido de la aplicación.
/// Contiene el pool de Postgres y el servicio de catálogo con su cache Redis.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub catalog: CatalogService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let db_config = DatabaseConfig::from_env()?;
        let db_pool = db::create_pool(&db_config).await?;

        let redis_config = RedisConfig::from_env();
        let redis_pool = deadpool_redis::Config::from_url(&redis_config.url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| anyhow::anyhow!("Failed to create Redis pool: {}", e))?;
        tracing::info!("✅ Redis response cache pool created");

        let store = Arc::new(PgProductStore::new(db_pool.clone()));
        let cache = Arc::new(RedisResponseCache::new(redis_pool));
        let catalog = CatalogService::new(store, cache, CacheTtls::from_env());

        Ok(AppState { db_pool, catalog })
    }
}
