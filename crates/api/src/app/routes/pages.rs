//! Page shells for the dynamic routes.
//!
//! The `slug` path segment is passed to the store as an opaque string; it is
//! never validated here, so an unknown or malformed slug renders a page that
//! simply has nothing to show.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::header,
    response::IntoResponse,
};

use crate::app::{errors, html, services::AppServices};

/// GET /laptops/:slug
pub async fn laptop_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    let product = match services.catalog.find_product(&slug).await {
        Ok(p) => p,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::debug!(%slug, found = product.is_some(), "rendering laptop page");
    (
        [(header::CONTENT_TYPE, html::CONTENT_TYPE)],
        html::laptop_page(&slug, product.as_ref()),
    )
        .into_response()
}

/// GET /categorias/:slug
pub async fn category_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    let category = match services.catalog.find_category(&slug).await {
        Ok(c) => c,
        Err(e) => return errors::store_error_to_response(e),
    };
    let brands = match services.catalog.get_brands_by_category(&slug).await {
        Ok(rows) => rows,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::debug!(%slug, brands = brands.len(), "rendering category page");
    (
        [(header::CONTENT_TYPE, html::CONTENT_TYPE)],
        html::category_page(&slug, category.as_ref(), &brands),
    )
        .into_response()
}
