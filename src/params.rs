//! Listing request parameters shared by the keyword filter and the paginator.

use std::collections::HashMap;

use serde::Deserialize;

/// Query-string parameters understood by listing pages.
///
/// `page` is kept as raw text so that a malformed value degrades to the first
/// page instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search_query: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Raw search text, empty when absent.
    pub fn search_query(&self) -> &str {
        self.search_query.as_deref().unwrap_or("")
    }

    /// Requested page number, `1` when absent or not an integer.
    ///
    /// The value is not clamped here; out-of-range pages are resolved against
    /// the collection size by the paginator.
    pub fn requested_page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

impl From<&HashMap<String, String>> for ListParams {
    fn from(map: &HashMap<String, String>) -> Self {
        Self {
            search_query: map.get("search_query").cloned(),
            page: map.get("page").cloned(),
        }
    }
}
