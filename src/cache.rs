//! Response cache backed by Redis.
//!
//! The cache stores fully shaped JSON response bodies keyed by the
//! canonicalized query shape. It is strictly best-effort: every failure is
//! surfaced as an `Err` to the caller, which logs and falls through to the
//! store. Entries expire by TTL only; nothing ever invalidates or mutates an
//! entry in place.

use anyhow::Result;
use async_trait::async_trait;
use deadpool_redis::Pool as RedisPool;
use redis::AsyncCommands;

/// Seam between the read coordinator and the cache backend.
/// Tests substitute recording or failing stubs through this trait.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;
}

/// Production implementation over a shared deadpool-redis pool.
pub struct RedisResponseCache {
    pool: RedisPool,
}

impl RedisResponseCache {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseCache for RedisResponseCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.pool.get().await?;
        let cached: Option<String> = conn.get(key).await?;
        Ok(cached)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.pool.get().await?;
        let _: () = conn.set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }
}
