//! Read-only catalog query backends.

pub mod catalog_store;
pub mod demo;
pub mod postgres;

pub use catalog_store::{CatalogReadStore, CatalogStoreError, InMemoryCatalogStore};
pub use demo::demo_catalog;
pub use postgres::PostgresCatalogStore;
