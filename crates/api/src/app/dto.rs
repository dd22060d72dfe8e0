use serde::{Deserialize, Serialize};

/// Results shown per search when the request does not ask for a size.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

// -------------------------
// Request DTOs
// -------------------------

/// `?q=...&limit=...` of the search routes. Both are optional; a missing or
/// blank `q` yields no hits.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<u32>,
}

impl SearchParams {
    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// List envelope of the JSON API: `{ "items": [...] }`.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ItemsResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
