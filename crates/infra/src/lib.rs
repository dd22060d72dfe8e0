//! Infrastructure layer: catalog query backends, database pool, configuration.

pub mod config;
pub mod db;
pub mod read_model;
