use std::sync::Arc;

use anyhow::Context;

use storefront_core::DomainResult;
use storefront_infra::{
    config::StoreBackend,
    db,
    read_model::{demo_catalog, CatalogReadStore, InMemoryCatalogStore, PostgresCatalogStore},
};

/// Shared handles every handler reaches through `Extension<Arc<AppServices>>`.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<dyn CatalogReadStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogReadStore>) -> Self {
        Self { catalog }
    }

    /// Services backed by the in-memory demo catalog (dev and tests).
    pub fn in_memory_demo() -> DomainResult<Self> {
        let store = InMemoryCatalogStore::new(demo_catalog()?);
        Ok(Self::new(Arc::new(store)))
    }
}

pub async fn build_services(backend: &StoreBackend) -> anyhow::Result<AppServices> {
    match backend {
        StoreBackend::InMemoryDemo => {
            tracing::info!("serving the in-memory demo catalog");
            AppServices::in_memory_demo().context("failed to build the demo catalog")
        }
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = db::connect(database_url, *max_connections)
                .await
                .context("failed to connect to Postgres")?;
            tracing::info!(max_connections, "serving the catalog from Postgres");
            Ok(AppServices::new(Arc::new(PostgresCatalogStore::new(pool))))
        }
    }
}
