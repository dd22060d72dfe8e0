//! Storefront HTTP surface: page shells, the search loader, legal pages and
//! the JSON catalog API.

pub mod app;
pub mod middleware;
