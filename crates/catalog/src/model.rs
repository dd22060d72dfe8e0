use serde::{Deserialize, Serialize};

use storefront_core::{BrandId, CategoryId, ProductId, Slug};

/// A catalog category ("Ultrabooks", "Gaming").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: Slug,
    pub name: String,
}

/// A manufacturer brand ("Lenovo", "ASUS").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub slug: Slug,
    pub name: String,
}

/// A product listed in the catalog.
///
/// Every product belongs to exactly one category. The brand is optional: some
/// listings (refurbished lots, accessories bundles) carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: Slug,
    pub name: String,
    pub category_id: CategoryId,
    pub brand_id: Option<BrandId>,
    /// Price in the smallest currency unit (e.g. cents).
    pub price_cents: Option<u64>,
}
