use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Crea el pool de conexiones a la base de datos del catálogo.
/// Compartido por todos los requests; solo lecturas, sin transacciones.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        "🔌 Connecting to catalog database ({} max connections)...",
        config.max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await?;

    tracing::info!("✅ Catalog database pool created successfully");

    Ok(pool)
}
