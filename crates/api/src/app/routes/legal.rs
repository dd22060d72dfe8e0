use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use storefront_legal::{legal_content, LegalPageType};

use crate::app::{errors, html};

fn parse_page(raw: &str) -> Result<LegalPageType, axum::response::Response> {
    raw.parse::<LegalPageType>()
        .map_err(|e| errors::json_error(StatusCode::NOT_FOUND, "not_found", e.to_string()))
}

/// GET /legal/:page (`terms-and-conditions`, `privacy-policy` or the camelCase keys)
pub async fn legal_page(Path(page): Path<String>) -> axum::response::Response {
    let page = match parse_page(&page) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    (
        [(header::CONTENT_TYPE, html::CONTENT_TYPE)],
        html::legal_page(page, legal_content(page)),
    )
        .into_response()
}

/// GET /api/legal/:page
pub async fn legal_json(Path(page): Path<String>) -> axum::response::Response {
    match parse_page(&page) {
        Ok(p) => Json(legal_content(p)).into_response(),
        Err(resp) => resp,
    }
}
