//! Postgres connection pool wiring.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::redact_url;

/// Open a connection pool against `database_url`.
///
/// Fails fast if the first connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    info!(
        database_url = %redact_url(database_url),
        max_connections,
        "connecting to postgres"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
