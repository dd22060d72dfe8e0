//! JSON catalog API. Rows are serialized exactly as the store returns them.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{
    dto::{ItemsResponse, SearchParams},
    errors,
    services::AppServices,
};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories))
        .route("/:slug/brands", get(list_brands))
}

/// GET /api/categories
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog.get_categories_with_count().await {
        Ok(rows) => Json(ItemsResponse::from(rows)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /api/categories/:slug/brands
pub async fn list_brands(
    Extension(services): Extension<Arc<AppServices>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match services.catalog.get_brands_by_category(&slug).await {
        Ok(rows) => Json(ItemsResponse::from(rows)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// GET /api/search?q=...&limit=...
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SearchParams>,
) -> axum::response::Response {
    match services
        .catalog
        .search_products(params.term(), params.limit())
        .await
    {
        Ok(hits) => Json(ItemsResponse::from(hits)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
