//! Legal content store.
//!
//! Static, versioned legal pages (terms and conditions, privacy policy) keyed by
//! a closed enumeration. The content is compiled into the binary, so lookups are
//! total, allocation-free and safe to share across request tasks.

pub mod content;
mod pages;

pub use content::{LegalPageContent, LegalPageType, LegalSection, UnknownLegalPage};

/// Look up the content for a legal page.
///
/// Always returns the same `&'static` value for a given page type.
pub fn legal_content(page: LegalPageType) -> &'static LegalPageContent {
    match page {
        LegalPageType::TermsAndConditions => &pages::TERMS_AND_CONDITIONS,
        LegalPageType::PrivacyPolicy => &pages::PRIVACY_POLICY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_is_stable_within_the_process() {
        for page in LegalPageType::ALL {
            let a = legal_content(page);
            let b = legal_content(page);
            assert!(std::ptr::eq(a, b));
        }
    }

    #[test]
    fn every_page_has_unique_section_ids() {
        for page in LegalPageType::ALL {
            let content = legal_content(page);
            assert!(!content.sections.is_empty(), "{page} has no sections");

            let mut seen = HashSet::new();
            for section in content.sections {
                assert!(seen.insert(section.id), "duplicate section id {} in {page}", section.id);
            }
        }
    }

    #[test]
    fn every_page_has_a_parseable_date() {
        for page in LegalPageType::ALL {
            assert!(
                legal_content(page).last_updated_date().is_ok(),
                "{page} has a malformed lastUpdated"
            );
        }
    }

    #[test]
    fn pages_are_distinct() {
        let terms = legal_content(LegalPageType::TermsAndConditions);
        let privacy = legal_content(LegalPageType::PrivacyPolicy);
        assert!(!std::ptr::eq(terms, privacy));
        assert_ne!(terms.sections[0].title, privacy.sections[0].title);
    }
}
