//! Domain error model.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the strict constructors in this crate and of catalog assembly.
///
/// Storage concerns belong to `storefront-infra`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid slug {value:?}: {reason}")]
    InvalidSlug { value: String, reason: &'static str },

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A record points at a category or brand that is not in the catalog.
    #[error("unknown {kind} {slug:?}")]
    UnknownReference { kind: &'static str, slug: String },
}

impl DomainError {
    pub fn invalid_slug(value: &str, reason: &'static str) -> Self {
        Self::InvalidSlug {
            value: value.to_string(),
            reason,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_reference(kind: &'static str, slug: &str) -> Self {
        Self::UnknownReference {
            kind,
            slug: slug.to_string(),
        }
    }
}
