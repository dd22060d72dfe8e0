//! `storefront-core`: shared kernel for the storefront workspace.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the `Slug` value object and the domain error model.

pub mod error;
pub mod id;
pub mod slug;

pub use error::{DomainError, DomainResult};
pub use id::{BrandId, CategoryId, ProductId};
pub use slug::Slug;
