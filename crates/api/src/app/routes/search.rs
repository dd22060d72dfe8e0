//! Search route with a streamed loading state.
//!
//! The response body is sent in two chunks: the page head with the loading
//! fragment goes out as soon as the request is accepted, and the results
//! fragment follows once the search loader completes.

use std::{convert::Infallible, sync::Arc};

use axum::{
    body::Body,
    extract::{Extension, Query},
    http::header,
    response::IntoResponse,
};
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::app::{dto::SearchParams, html, services::AppServices};

/// GET /search?q=...&limit=...
pub async fn search_page(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<SearchParams>,
) -> axum::response::Response {
    let (tx, rx) = unbounded_channel::<Result<String, Infallible>>();

    // The receiver lives in the body; a send only fails once the client is gone.
    let _ = tx.send(Ok(html::search_head(params.term())));

    tokio::spawn(async move {
        let tail = match services
            .catalog
            .search_products(params.term(), params.limit())
            .await
        {
            Ok(hits) => {
                tracing::debug!(term = params.term(), hits = hits.len(), "search finished");
                html::search_results(&hits)
            }
            Err(e) => {
                tracing::error!(error = %e, term = params.term(), "search failed");
                html::search_failed()
            }
        };
        let _ = tx.send(Ok(tail));
    });

    (
        [(header::CONTENT_TYPE, html::CONTENT_TYPE)],
        Body::from_stream(UnboundedReceiverStream::new(rx)),
    )
        .into_response()
}
