//! Product catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::catalog::{CategoryFacets, PagedResult, ProductFilter, ProductRecord};
use crate::error::ApiError;
use crate::state::AppState;

pub fn create_products_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(get_products))
        .route("/products/filters/categories", get(get_categories))
        .route("/products/:id", get(get_product_by_id))
}

/// Filtered, sorted collection read served through the response cache.
async fn get_products(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<PagedResult>, ApiError> {
    let result = state.catalog.list_products(filter).await?;
    Ok(Json(result))
}

/// Single product lookup; 404 when the id matches nothing.
async fn get_product_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductRecord>, ApiError> {
    let record = state.catalog.product_by_id(&id).await?;
    Ok(Json(record))
}

/// All dimension codes/names for building the filter UI. Uncached.
async fn get_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryFacets>, ApiError> {
    let facets = state.catalog.categories().await?;
    Ok(Json(facets))
}
