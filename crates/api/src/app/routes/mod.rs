use axum::{routing::get, Router};

pub mod catalog;
pub mod legal;
pub mod pages;
pub mod search;
pub mod system;

/// Router for every public storefront endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/laptops/:slug", get(pages::laptop_page))
        .route("/categorias/:slug", get(pages::category_page))
        .route("/search", get(search::search_page))
        .route("/legal/:page", get(legal::legal_page))
        .nest("/api", api_router())
}

fn api_router() -> Router {
    Router::new()
        .nest("/categories", catalog::router())
        .route("/search", get(catalog::search))
        .route("/legal/:page", get(legal::legal_json))
}
