//! URL-safe identifiers for catalog subjects (`/categorias/{slug}`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum accepted slug length, in bytes.
pub const MAX_SLUG_LEN: usize = 128;

/// Slug of a catalog record.
///
/// [`Slug::parse`] enforces the authoring grammar: lowercase ASCII letters,
/// digits and single hyphens, never starting or ending with a hyphen.
/// Slugs read back from storage or from the wire go through
/// [`Slug::from_stored`] instead and are kept verbatim, since the database
/// column accepts any text and lookups compare slugs as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::invalid_slug(raw, "empty"));
        }
        if raw.len() > MAX_SLUG_LEN {
            return Err(DomainError::invalid_slug(raw, "longer than 128 bytes"));
        }
        if raw.starts_with('-') || raw.ends_with('-') || raw.contains("--") {
            return Err(DomainError::invalid_slug(raw, "misplaced hyphen"));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::invalid_slug(
                raw,
                "only lowercase ascii letters, digits and hyphens are allowed",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wrap a slug that already exists in storage, without validation.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self::from_stored(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
