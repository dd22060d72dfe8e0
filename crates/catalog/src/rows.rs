//! Canonical row shapes for the catalog queries.
//!
//! These structs are the single definition shared by every query backend and
//! every consumer (pages, JSON endpoints). Backends decode rows by the column
//! names published in [`RowShape::COLUMNS`]; consumers serialize the same
//! structs. Changing a field here changes both sides at once.

use serde::{Deserialize, Serialize};

use storefront_core::{BrandId, CategoryId, ProductId, Slug};

/// Column list of a query row, in declaration order.
pub trait RowShape {
    const COLUMNS: &'static [&'static str];
}

/// One row of `get_brands_by_category`: a brand and how many distinct products
/// it has in the requested category. `product_count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandWithProductCount {
    pub id: BrandId,
    pub slug: Slug,
    pub name: String,
    pub product_count: u64,
}

impl RowShape for BrandWithProductCount {
    const COLUMNS: &'static [&'static str] = &["id", "slug", "name", "product_count"];
}

/// One row of `get_categories_with_count`: a category and how many distinct
/// products it holds across the whole catalog. `product_count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryWithCount {
    pub id: CategoryId,
    pub slug: Slug,
    pub name: String,
    pub product_count: u64,
}

impl RowShape for CategoryWithCount {
    const COLUMNS: &'static [&'static str] = &["id", "slug", "name", "product_count"];
}

/// One row of the search loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductSearchHit {
    pub id: ProductId,
    pub slug: Slug,
    pub name: String,
    pub brand_name: Option<String>,
    pub category_slug: Slug,
}

impl RowShape for ProductSearchHit {
    const COLUMNS: &'static [&'static str] = &["id", "slug", "name", "brand_name", "category_slug"];
}
