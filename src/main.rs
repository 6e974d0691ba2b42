use anyhow::Result;
use katalog_ws::{config::ServerConfig, create_app_router, state::AppState};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Carga las variables de entorno desde el archivo .env. Falla silenciosamente si no existe.
    dotenvy::dotenv().ok();

    // Configura el subscriber de tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Crea el estado de la aplicación: pool de Postgres, cache Redis, servicio de catálogo
    let app_state = AppState::new().await?;
    info!("🚀 Application state initialized");

    let db_pool = app_state.db_pool.clone();
    let app = create_app_router(Arc::new(app_state));

    let server_config = ServerConfig::from_env();
    let addr = format!("{}:{}", server_config.host, server_config.port);
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Cierra el pool explícitamente al terminar
    db_pool.close().await;
    info!("database pool closed, shutdown complete");

    Ok(())
}
