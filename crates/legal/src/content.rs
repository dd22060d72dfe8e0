use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which legal page is being requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegalPageType {
    TermsAndConditions,
    PrivacyPolicy,
}

impl LegalPageType {
    pub const ALL: [LegalPageType; 2] = [Self::TermsAndConditions, Self::PrivacyPolicy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TermsAndConditions => "termsAndConditions",
            Self::PrivacyPolicy => "privacyPolicy",
        }
    }

    /// Human-readable page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::TermsAndConditions => "Términos y condiciones",
            Self::PrivacyPolicy => "Política de privacidad",
        }
    }
}

impl core::fmt::Display for LegalPageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown legal page: {0}")]
pub struct UnknownLegalPage(pub String);

impl FromStr for LegalPageType {
    type Err = UnknownLegalPage;

    /// Accepts the canonical keys and their kebab-case URL forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "termsAndConditions" | "terms-and-conditions" => Ok(Self::TermsAndConditions),
            "privacyPolicy" | "privacy-policy" => Ok(Self::PrivacyPolicy),
            other => Err(UnknownLegalPage(other.to_string())),
        }
    }
}

/// One titled section of a legal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalSection {
    /// Unique within its page; used as the HTML anchor.
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// A versioned legal page. `sections` are in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalPageContent {
    /// `YYYY-MM-DD`.
    pub last_updated: &'static str,
    pub version: &'static str,
    pub sections: &'static [LegalSection],
}

impl LegalPageContent {
    pub fn last_updated_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(self.last_updated, "%Y-%m-%d")
    }
}
