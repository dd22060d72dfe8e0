//! Postgres-backed catalog queries.
//!
//! Schema (owned by the migration tooling, not by this crate):
//!
//! ```sql
//! categories (id uuid PRIMARY KEY, slug text UNIQUE NOT NULL, name text NOT NULL)
//! brands     (id uuid PRIMARY KEY, slug text UNIQUE NOT NULL, name text NOT NULL)
//! products   (id uuid PRIMARY KEY, slug text UNIQUE NOT NULL, name text NOT NULL,
//!             category_id uuid NOT NULL REFERENCES categories(id),
//!             brand_id uuid NULL REFERENCES brands(id),
//!             price_cents bigint NULL)
//! ```
//!
//! ## Semantics
//!
//! The SQL below mirrors `CatalogSnapshot` exactly: `COUNT(DISTINCT p.id)`,
//! inner joins (so brandless products never count under a brand and empty
//! groups never appear), and `ORDER BY product_count DESC, name, slug` with
//! `COLLATE "C"` so ties break byte-wise like the in-memory backend.
//!
//! ## Error Mapping
//!
//! Every `sqlx::Error` is wrapped unmodified in `CatalogStoreError::Storage`
//! together with the operation name. Rows that violate the canonical shape
//! (missing columns, negative counts) become `CatalogStoreError::Decode`.
//! Slugs are never re-validated on the way out.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{instrument, Span};

use storefront_catalog::{
    clamp_search_limit, BrandWithProductCount, Category, CategoryWithCount, Product, ProductSearchHit,
};
use storefront_core::{BrandId, CategoryId, ProductId, Slug};

use super::catalog_store::{CatalogReadStore, CatalogStoreError};

pub(crate) const BRANDS_BY_CATEGORY_SQL: &str = r#"
    SELECT
        b.id AS id,
        b.slug AS slug,
        b.name AS name,
        COUNT(DISTINCT p.id) AS product_count
    FROM products p
    JOIN categories c ON c.id = p.category_id
    JOIN brands b ON b.id = p.brand_id
    WHERE c.slug = $1
    GROUP BY b.id, b.slug, b.name
    ORDER BY product_count DESC, b.name COLLATE "C" ASC, b.slug COLLATE "C" ASC
"#;

pub(crate) const CATEGORIES_WITH_COUNT_SQL: &str = r#"
    SELECT
        c.id AS id,
        c.slug AS slug,
        c.name AS name,
        COUNT(DISTINCT p.id) AS product_count
    FROM categories c
    JOIN products p ON p.category_id = c.id
    GROUP BY c.id, c.slug, c.name
    ORDER BY product_count DESC, c.name COLLATE "C" ASC, c.slug COLLATE "C" ASC
"#;

pub(crate) const SEARCH_PRODUCTS_SQL: &str = r#"
    SELECT
        p.id AS id,
        p.slug AS slug,
        p.name AS name,
        b.name AS brand_name,
        c.slug AS category_slug
    FROM products p
    JOIN categories c ON c.id = p.category_id
    LEFT JOIN brands b ON b.id = p.brand_id
    WHERE p.name ILIKE $1 ESCAPE '\'
    ORDER BY p.name COLLATE "C" ASC, p.slug COLLATE "C" ASC
    LIMIT $2
"#;

const FIND_CATEGORY_SQL: &str = r#"
    SELECT id, slug, name
    FROM categories
    WHERE slug = $1
"#;

const FIND_PRODUCT_SQL: &str = r#"
    SELECT id, slug, name, category_id, brand_id, price_cents
    FROM products
    WHERE slug = $1
"#;

/// Postgres-backed catalog read store.
///
/// Uses the SQLx connection pool, which is `Send + Sync`; every query is a
/// single read statement with no explicit transaction.
#[derive(Debug, Clone)]
pub struct PostgresCatalogStore {
    pool: Arc<PgPool>,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl CatalogReadStore for PostgresCatalogStore {
    #[instrument(skip(self), fields(row_count = tracing::field::Empty), err)]
    async fn get_brands_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<BrandWithProductCount>, CatalogStoreError> {
        let rows = sqlx::query(BRANDS_BY_CATEGORY_SQL)
            .bind(category_slug)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_brands_by_category", e))?;

        Span::current().record("row_count", rows.len());
        rows.iter().map(decode_brand_row).collect()
    }

    #[instrument(skip(self), fields(row_count = tracing::field::Empty), err)]
    async fn get_categories_with_count(&self) -> Result<Vec<CategoryWithCount>, CatalogStoreError> {
        let rows = sqlx::query(CATEGORIES_WITH_COUNT_SQL)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_categories_with_count", e))?;

        Span::current().record("row_count", rows.len());
        rows.iter().map(decode_category_row).collect()
    }

    #[instrument(skip(self), err)]
    async fn find_category(&self, slug: &str) -> Result<Option<Category>, CatalogStoreError> {
        let row = sqlx::query(FIND_CATEGORY_SQL)
            .bind(slug)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_category", e))?;

        row.as_ref()
            .map(|row| -> Result<Category, CatalogStoreError> {
                Ok(Category {
                    id: CategoryId::from_uuid(column(row, "category", "id")?),
                    slug: slug_column(row, "category", "slug")?,
                    name: column(row, "category", "name")?,
                })
            })
            .transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_product(&self, slug: &str) -> Result<Option<Product>, CatalogStoreError> {
        let row = sqlx::query(FIND_PRODUCT_SQL)
            .bind(slug)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_product", e))?;

        row.as_ref()
            .map(|row| -> Result<Product, CatalogStoreError> {
                let price_cents: Option<i64> = column(row, "product", "price_cents")?;
                let brand_id: Option<uuid::Uuid> = column(row, "product", "brand_id")?;
                Ok(Product {
                    id: ProductId::from_uuid(column(row, "product", "id")?),
                    slug: slug_column(row, "product", "slug")?,
                    name: column(row, "product", "name")?,
                    category_id: CategoryId::from_uuid(column(row, "product", "category_id")?),
                    brand_id: brand_id.map(BrandId::from_uuid),
                    price_cents: price_cents
                        .map(|p| non_negative("product", "price_cents", p))
                        .transpose()?,
                })
            })
            .transpose()
    }

    #[instrument(skip(self), fields(row_count = tracing::field::Empty), err)]
    async fn search_products(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<ProductSearchHit>, CatalogStoreError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(SEARCH_PRODUCTS_SQL)
            .bind(like_pattern(term))
            .bind(i64::from(clamp_search_limit(limit)))
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("search_products", e))?;

        Span::current().record("row_count", rows.len());
        rows.iter().map(decode_search_row).collect()
    }
}

fn decode_brand_row(row: &PgRow) -> Result<BrandWithProductCount, CatalogStoreError> {
    const ROW: &str = "brand_with_product_count";
    Ok(BrandWithProductCount {
        id: BrandId::from_uuid(column(row, ROW, "id")?),
        slug: slug_column(row, ROW, "slug")?,
        name: column(row, ROW, "name")?,
        product_count: count_column(row, ROW)?,
    })
}

fn decode_category_row(row: &PgRow) -> Result<CategoryWithCount, CatalogStoreError> {
    const ROW: &str = "category_with_count";
    Ok(CategoryWithCount {
        id: CategoryId::from_uuid(column(row, ROW, "id")?),
        slug: slug_column(row, ROW, "slug")?,
        name: column(row, ROW, "name")?,
        product_count: count_column(row, ROW)?,
    })
}

fn decode_search_row(row: &PgRow) -> Result<ProductSearchHit, CatalogStoreError> {
    const ROW: &str = "product_search_hit";
    Ok(ProductSearchHit {
        id: ProductId::from_uuid(column(row, ROW, "id")?),
        slug: slug_column(row, ROW, "slug")?,
        name: column(row, ROW, "name")?,
        brand_name: column(row, ROW, "brand_name")?,
        category_slug: slug_column(row, ROW, "category_slug")?,
    })
}

fn column<'r, T>(row: &'r PgRow, row_name: &'static str, name: &str) -> Result<T, CatalogStoreError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| CatalogStoreError::Decode {
        row: row_name,
        message: format!("column {name}: {e}"),
    })
}

/// Stored slugs are opaque: whatever the column holds is what lookups match.
fn slug_column(row: &PgRow, row_name: &'static str, name: &str) -> Result<Slug, CatalogStoreError> {
    let raw: String = column(row, row_name, name)?;
    Ok(Slug::from_stored(raw))
}

fn count_column(row: &PgRow, row_name: &'static str) -> Result<u64, CatalogStoreError> {
    let count: i64 = column(row, row_name, "product_count")?;
    non_negative(row_name, "product_count", count)
}

fn non_negative(row_name: &'static str, name: &str, value: i64) -> Result<u64, CatalogStoreError> {
    u64::try_from(value).map_err(|_| CatalogStoreError::Decode {
        row: row_name,
        message: format!("column {name} is negative: {value}"),
    })
}

/// Build an `ILIKE` substring pattern, escaping the LIKE metacharacters.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> CatalogStoreError {
    tracing::debug!(operation, error = %err, "catalog query failed");
    CatalogStoreError::Storage {
        operation,
        source: err,
    }
}
