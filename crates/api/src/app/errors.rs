use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_infra::read_model::CatalogStoreError;

/// Log a failed catalog query and turn it into a `500 store_error` response.
pub fn store_error_to_response(err: CatalogStoreError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog query failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
