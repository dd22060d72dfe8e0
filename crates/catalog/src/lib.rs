//! Catalog domain module.
//!
//! This crate defines the catalog records, the canonical row shapes returned by
//! the catalog queries, and the aggregation rules behind them, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod model;
pub mod rows;
pub mod snapshot;

pub use model::{Brand, Category, Product};
pub use rows::{BrandWithProductCount, CategoryWithCount, ProductSearchHit, RowShape};
pub use snapshot::{clamp_search_limit, CatalogSnapshot, MAX_SEARCH_LIMIT};
