//! Typed configuration loaded from environment variables.
//!
//! Every knob has a default except DATABASE_URL; `.env` is loaded by `main`
//! before any of these are read.

use std::env;
use std::time::Duration;

/// HTTP listener configuration
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);
        Self { host, port }
    }
}

/// Postgres connection pool configuration.
/// Defaults mirror the pool the service has always run with: 10 max / 0 min,
/// 30s acquire, 30s idle.
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|e| anyhow::anyhow!("DATABASE_URL must be set: {}", e))?;
        Ok(Self {
            url,
            max_connections: env_u32("DB_POOL_MAX", 10),
            min_connections: env_u32("DB_POOL_MIN", 0),
            acquire_timeout: Duration::from_secs(env_u64("DB_ACQUIRE_TIMEOUT_SECONDS", 30)),
            idle_timeout: Duration::from_secs(env_u64("DB_IDLE_TIMEOUT_SECONDS", 30)),
        })
    }
}

/// Redis cache configuration
pub struct RedisConfig {
    pub url: String,
}

impl RedisConfig {
    pub fn from_env() -> Self {
        let url = env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        Self { url }
    }
}

/// True when APP_ENV=development; error responses then carry the underlying
/// database error text in a `detail` field.
pub fn is_development() -> bool {
    env::var("APP_ENV").map(|v| v == "development").unwrap_or(false)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .map(|val| val.parse::<u32>().unwrap_or(default))
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .map(|val| val.parse::<u64>().unwrap_or(default))
        .unwrap_or(default)
}
