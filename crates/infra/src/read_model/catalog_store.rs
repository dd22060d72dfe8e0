use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use storefront_catalog::{
    BrandWithProductCount, CatalogSnapshot, Category, CategoryWithCount, Product, ProductSearchHit,
};

#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// The database rejected or could not run the query.
    #[error("storage error in {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A row came back but does not fit the canonical row shape.
    #[error("failed to decode {row} row: {message}")]
    Decode { row: &'static str, message: String },

    /// The backend cannot serve queries at all.
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only catalog queries.
///
/// Every method is idempotent: with unchanged data, repeated calls return
/// identical, identically ordered results. Failures are propagated as-is; no
/// backend retries.
#[async_trait]
pub trait CatalogReadStore: Send + Sync {
    /// Brands with at least one product in the category, with distinct product counts.
    async fn get_brands_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<BrandWithProductCount>, CatalogStoreError>;

    /// Categories holding at least one product, with distinct product counts.
    async fn get_categories_with_count(&self) -> Result<Vec<CategoryWithCount>, CatalogStoreError>;

    async fn find_category(&self, slug: &str) -> Result<Option<Category>, CatalogStoreError>;

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, CatalogStoreError>;

    /// Case-insensitive product name search; `limit` is clamped to `1..=50`.
    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ProductSearchHit>, CatalogStoreError>;
}

#[async_trait]
impl<S> CatalogReadStore for Arc<S>
where
    S: CatalogReadStore + ?Sized,
{
    async fn get_brands_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<BrandWithProductCount>, CatalogStoreError> {
        (**self).get_brands_by_category(category_slug).await
    }

    async fn get_categories_with_count(&self) -> Result<Vec<CategoryWithCount>, CatalogStoreError> {
        (**self).get_categories_with_count().await
    }

    async fn find_category(&self, slug: &str) -> Result<Option<Category>, CatalogStoreError> {
        (**self).find_category(slug).await
    }

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, CatalogStoreError> {
        (**self).find_product(slug).await
    }

    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ProductSearchHit>, CatalogStoreError> {
        (**self).search_products(term, limit).await
    }
}

/// In-memory catalog for tests/dev.
///
/// Query semantics are those of [`CatalogSnapshot`]; the Postgres backend is
/// written to match them. The snapshot is immutable once the store is built.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    snapshot: CatalogSnapshot,
}

impl InMemoryCatalogStore {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl CatalogReadStore for InMemoryCatalogStore {
    async fn get_brands_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<BrandWithProductCount>, CatalogStoreError> {
        Ok(self.snapshot.brands_by_category(category_slug))
    }

    async fn get_categories_with_count(&self) -> Result<Vec<CategoryWithCount>, CatalogStoreError> {
        Ok(self.snapshot.categories_with_count())
    }

    async fn find_category(&self, slug: &str) -> Result<Option<Category>, CatalogStoreError> {
        Ok(self.snapshot.category(slug).cloned())
    }

    async fn find_product(&self, slug: &str) -> Result<Option<Product>, CatalogStoreError> {
        Ok(self.snapshot.product(slug).cloned())
    }

    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ProductSearchHit>, CatalogStoreError> {
        Ok(self.snapshot.search(term, limit))
    }
}
