//! HTTP book catalog implementation
//!
//! Proxies keyword searches to the Naver open API and ISBN-13 lookups to
//! the Aladin ItemLookUp API.

use serde_json::Value;

use crate::{BookCatalog, BookSearchPage, CatalogConfig, CatalogError, SearchQuery};

const SEARCH_ENDPOINT: &str = "https://openapi.naver.com/v1/search/book.json";
const LOOKUP_ENDPOINT: &str = "https://www.aladin.co.kr/ttb/api/ItemLookUp.aspx";

/// Real HTTP catalog backed by the external book APIs.
pub struct HttpCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Create a new HTTP catalog from configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl BookCatalog for HttpCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<BookSearchPage, CatalogError> {
        let mut params = vec![("query", query.query.clone())];
        if let Some(start) = query.start {
            params.push(("start", start.to_string()));
        }
        if let Some(display) = query.display {
            params.push(("display", display.to_string()));
        }

        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .query(&params)
            .header("X-Naver-Client-Id", &self.config.client_id)
            .header("X-Naver-Client-Secret", &self.config.client_secret)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to reach the book search API");
                CatalogError::Request(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Response(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, body = %body, "Book search API returned an error");
            return Err(CatalogError::Response(format!(
                "Search API returned {}",
                status
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse book search API response");
            CatalogError::Response(format!("Unexpected search API payload: {}", e))
        })
    }

    async fn find_by_isbn13(&self, isbn13: &str) -> Result<Option<Value>, CatalogError> {
        let ttb_key = self.config.ttb_key.as_deref().ok_or_else(|| {
            tracing::error!("ISBN lookup requested but ALADIN_TTB_KEY is not configured");
            CatalogError::Configuration("Lookup API key is not configured".to_string())
        })?;

        let response = self
            .http
            .get(LOOKUP_ENDPOINT)
            .query(&[
                ("ttbkey", ttb_key),
                ("ItemId", isbn13),
                ("ItemIdType", "ISBN13"),
                ("output", "js"),
                ("Version", "20131101"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to reach the book lookup API");
                CatalogError::Request(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Response(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, body = %body, "Book lookup API returned an error");
            return Err(CatalogError::Response(format!(
                "Lookup API returned {}",
                status
            )));
        }

        let document: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse book lookup API response");
            CatalogError::Response(format!("Unexpected lookup API payload: {}", e))
        })?;

        // The lookup API reports unknown ISBNs as an empty item list
        let has_items = document
            .get("item")
            .and_then(Value::as_array)
            .is_some_and(|items| !items.is_empty());

        Ok(has_items.then_some(document))
    }
}
