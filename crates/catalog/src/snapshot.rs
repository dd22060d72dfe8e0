//! In-process catalog view and the aggregation rules behind the catalog queries.
//!
//! The rules here are the reference semantics; the Postgres backend expresses
//! the same rules in SQL:
//! - counts are of **distinct** products;
//! - a product without a brand, or whose brand/category is unknown, is not counted
//!   under a brand (inner-join semantics);
//! - groups with no products produce no row;
//! - rows are ordered by `product_count` descending, then `name`, then `slug`
//!   (byte-wise), which is a total order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use storefront_core::{BrandId, CategoryId, ProductId};

use crate::model::{Brand, Category, Product};
use crate::rows::{BrandWithProductCount, CategoryWithCount, ProductSearchHit};

/// Upper bound on search results returned in one call.
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Clamp a requested search limit into `1..=MAX_SEARCH_LIMIT`.
pub fn clamp_search_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_SEARCH_LIMIT)
}

/// A complete, immutable-by-convention copy of the catalog tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.as_str() == slug)
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug.as_str() == slug)
    }

    /// Brands that have at least one product in the category with this slug.
    ///
    /// An unknown slug yields an empty result.
    pub fn brands_by_category(&self, category_slug: &str) -> Vec<BrandWithProductCount> {
        let Some(category) = self.category(category_slug) else {
            return Vec::new();
        };

        let brands: HashMap<BrandId, &Brand> = self.brands.iter().map(|b| (b.id, b)).collect();

        let mut grouped: BTreeMap<BrandId, BTreeSet<ProductId>> = BTreeMap::new();
        for product in self.products.iter().filter(|p| p.category_id == category.id) {
            let Some(brand_id) = product.brand_id else {
                continue;
            };
            if brands.contains_key(&brand_id) {
                grouped.entry(brand_id).or_default().insert(product.id);
            }
        }

        let mut rows: Vec<BrandWithProductCount> = grouped
            .into_iter()
            .map(|(brand_id, products)| {
                let brand = brands[&brand_id];
                BrandWithProductCount {
                    id: brand.id,
                    slug: brand.slug.clone(),
                    name: brand.name.clone(),
                    product_count: products.len() as u64,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.product_count
                .cmp(&a.product_count)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.slug.cmp(&b.slug))
        });
        rows
    }

    /// Every category holding at least one product, with its product count.
    pub fn categories_with_count(&self) -> Vec<CategoryWithCount> {
        let mut grouped: HashMap<CategoryId, BTreeSet<ProductId>> = HashMap::new();
        for product in &self.products {
            grouped.entry(product.category_id).or_default().insert(product.id);
        }

        let mut rows: Vec<CategoryWithCount> = self
            .categories
            .iter()
            .filter_map(|category| {
                let products = grouped.get(&category.id)?;
                Some(CategoryWithCount {
                    id: category.id,
                    slug: category.slug.clone(),
                    name: category.name.clone(),
                    product_count: products.len() as u64,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.product_count
                .cmp(&a.product_count)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.slug.cmp(&b.slug))
        });
        rows
    }

    /// Case-insensitive substring search on product names.
    ///
    /// A blank term matches nothing. Results are ordered by name, then slug.
    pub fn search(&self, term: &str, limit: u32) -> Vec<ProductSearchHit> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let categories: HashMap<CategoryId, &Category> =
            self.categories.iter().map(|c| (c.id, c)).collect();
        let brands: HashMap<BrandId, &Brand> = self.brands.iter().map(|b| (b.id, b)).collect();

        let mut hits: Vec<ProductSearchHit> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .filter_map(|p| {
                let category = categories.get(&p.category_id)?;
                Some(ProductSearchHit {
                    id: p.id,
                    slug: p.slug.clone(),
                    name: p.name.clone(),
                    brand_name: p
                        .brand_id
                        .and_then(|id| brands.get(&id))
                        .map(|b| b.name.clone()),
                    category_slug: category.slug.clone(),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
        hits.truncate(clamp_search_limit(limit) as usize);
        hits
    }
}
