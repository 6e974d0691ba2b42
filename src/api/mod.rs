use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::state::AppState;

pub mod products;

use products::create_products_router;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Legacy route kept for compatibility with old clients
        .route("/data", get(legacy_data))
        .merge(create_products_router())
}

/// Service banner with the endpoint listing
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the catalog API!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/products",
            "/products/:id",
            "/products/filters/categories"
        ]
    }))
}

/// Liveness endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn legacy_data() -> Redirect {
    Redirect::temporary("/products")
}
