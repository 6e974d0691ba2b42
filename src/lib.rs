use std::sync::Arc;

use axum::Router;
use axum::http::{header, Method};
use tower_http::compression::{predicate::SizeAbove, CompressionLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cache;
pub mod cache_key;
pub mod cache_ttl;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

use api::create_api_router;
use state::AppState;

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_api_router())
        .with_state(app_state)
        .layer(
            CompressionLayer::new()
                .gzip(true)
                .br(true)
                .deflate(true)
                .compress_when(SizeAbove::new(1024)), // Only compress responses > 1KB
        )
        .layer(TraceLayer::new_for_http())
        .layer(get_cors_layer())
}

fn get_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ])
}
