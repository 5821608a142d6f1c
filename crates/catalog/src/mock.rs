//! Mock book catalog implementation
//!
//! Serves preset results from memory for tests and local development.
//! Thread-safe via `Arc<Mutex<>>`.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{BookCatalog, BookSearchPage, CatalogError, SearchQuery};

/// Mock catalog that returns preset search pages and lookup documents.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    search_pages: Arc<Mutex<HashMap<String, BookSearchPage>>>,
    lookups: Arc<Mutex<HashMap<String, Value>>>,
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the page returned for a search query.
    pub fn insert_search_page(&self, query: &str, page: BookSearchPage) {
        self.search_pages
            .lock()
            .expect("search pages lock poisoned — prior test panicked")
            .insert(query.to_string(), page);
    }

    /// Preset the document returned for an ISBN lookup.
    pub fn insert_lookup(&self, isbn13: &str, document: Value) {
        self.lookups
            .lock()
            .expect("lookups lock poisoned — prior test panicked")
            .insert(isbn13.to_string(), document);
    }
}

#[async_trait::async_trait]
impl BookCatalog for MockCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<BookSearchPage, CatalogError> {
        tracing::debug!(query = %query.query, "Mock catalog: serving search");
        let pages = self
            .search_pages
            .lock()
            .map_err(|e| CatalogError::Request(format!("search pages lock poisoned: {e}")))?;

        Ok(pages.get(&query.query).cloned().unwrap_or(BookSearchPage {
            start: query.start.unwrap_or(1),
            display: query.display.unwrap_or(10),
            ..Default::default()
        }))
    }

    async fn find_by_isbn13(&self, isbn13: &str) -> Result<Option<Value>, CatalogError> {
        tracing::debug!(%isbn13, "Mock catalog: serving lookup");
        let lookups = self
            .lookups
            .lock()
            .map_err(|e| CatalogError::Request(format!("lookups lock poisoned: {e}")))?;

        Ok(lookups.get(isbn13).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_returns_preset_page() {
        let mock = MockCatalog::new();
        let page = BookSearchPage {
            total: 1,
            start: 1,
            display: 10,
            ..Default::default()
        };
        mock.insert_search_page("dune", page.clone());

        let result = mock
            .search(&SearchQuery {
                query: "dune".to_string(),
                start: None,
                display: None,
            })
            .await
            .unwrap();
        assert_eq!(result, page);
    }

    #[tokio::test]
    async fn test_search_without_preset_returns_empty_page() {
        let mock = MockCatalog::new();
        let result = mock
            .search(&SearchQuery {
                query: "unknown".to_string(),
                start: Some(3),
                display: Some(5),
            })
            .await
            .unwrap();

        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
        assert_eq!(result.start, 3);
        assert_eq!(result.display, 5);
    }

    #[tokio::test]
    async fn test_lookup_returns_preset_document() {
        let mock = MockCatalog::new();
        mock.insert_lookup("9780441478125", json!({"item": [{"itemPage": 304}]}));

        let found = mock.find_by_isbn13("9780441478125").await.unwrap();
        assert!(found.is_some());

        let missing = mock.find_by_isbn13("9999999999999").await.unwrap();
        assert!(missing.is_none());
    }
}
