//! Search index collaborator
//!
//! The search box never ranks or stores documents itself. It hands the
//! current query to a [`SearchIndex`] and renders whatever comes back.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::SearchResult;
use crate::util::normalize_query;

/// Something that turns a query string into result records.
pub trait SearchIndex {
    /// Results for `query`, in display order.
    fn search(&self, query: &str) -> Vec<SearchResult>;
}

impl<T: SearchIndex + ?Sized> SearchIndex for &T {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        (**self).search(query)
    }
}

impl<T: SearchIndex + ?Sized> SearchIndex for Arc<T> {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        (**self).search(query)
    }
}

/// In-memory index over the site's prebuilt search document.
///
/// Matches case-insensitively on title and excerpt and keeps document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIndex {
    documents: Vec<SearchResult>,
    max_results: Option<usize>,
}

impl StaticIndex {
    /// Build an index over `documents`
    pub const fn new(documents: Vec<SearchResult>) -> Self {
        Self {
            documents,
            max_results: None,
        }
    }

    /// Parse a JSON array of result records.
    pub fn from_json(payload: &str) -> Result<Self> {
        let documents: Vec<SearchResult> = serde_json::from_str(payload)
            .map_err(|error| Error::Index(format!("invalid search document JSON: {error}")))?;
        Ok(Self::new(documents))
    }

    /// Cap the number of results returned per query
    #[must_use]
    pub const fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl SearchIndex for StaticIndex {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }

        let limit = self.max_results.unwrap_or(usize::MAX);
        self.documents
            .iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(&query)
                    || doc.excerpt.to_lowercase().contains(&query)
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> StaticIndex {
        StaticIndex::new(vec![
            SearchResult::new("1", "Rust ownership", "Borrowing rules", "/rust/ownership"),
            SearchResult::new("2", "Gardening", "Growing rust-resistant roses", "/garden"),
            SearchResult::new("3", "Cooking", "Bread basics", "/cooking"),
        ])
    }

    #[test]
    fn matches_title_and_excerpt_case_insensitively() {
        let results = sample_index().search("RUST");
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn blank_query_returns_nothing() {
        assert!(sample_index().search("   ").is_empty());
    }

    #[test]
    fn max_results_truncates() {
        let index = sample_index().with_max_results(Some(1));
        assert_eq!(index.search("rust").len(), 1);
    }

    #[test]
    fn from_json_rejects_malformed_payload() {
        let error = StaticIndex::from_json("{not json").unwrap_err();
        assert!(error.to_string().contains("search document"));
    }

    #[test]
    fn arc_index_delegates() {
        let index = Arc::new(sample_index());
        assert_eq!(index.search("bread").len(), 1);
    }
}
