//! Pagemark book catalog service
//!
//! Proxies book search and ISBN lookup to external book APIs with support for:
//! - Naver open API for keyword search
//! - Aladin ItemLookUp for ISBN-13 detail lookup
//! - Mock catalog for testing and development

pub mod client;
pub mod mock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    #[error("Catalog request error: {0}")]
    Request(String),

    #[error("Catalog response error: {0}")]
    Response(String),
}

/// A keyword search request against the book API.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub start: Option<u32>,
    pub display: Option<u32>,
}

/// One result item in the search API's page shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSearchItem {
    pub title: String,
    pub link: String,
    pub image: String,
    pub author: String,
    pub discount: String,
    pub publisher: String,
    pub pubdate: String,
    pub isbn: String,
    pub description: String,
}

/// The search API's page shape, passed through to clients unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSearchPage {
    pub last_build_date: String,
    pub total: u64,
    pub start: u32,
    pub display: u32,
    pub items: Vec<BookSearchItem>,
}

/// Catalog service configuration.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Catalog provider (http, mock)
    pub provider: String,
    /// Client id for the search API
    pub client_id: String,
    /// Client secret for the search API
    pub client_secret: String,
    /// TTB key for the ISBN lookup API; lookups fail without it
    pub ttb_key: Option<String>,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("provider", &self.provider)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("ttb_key", &self.ttb_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Book catalog trait for different implementations.
#[async_trait::async_trait]
pub trait BookCatalog: Send + Sync {
    /// Run a keyword search against the book search API.
    async fn search(&self, query: &SearchQuery) -> Result<BookSearchPage, CatalogError>;

    /// Look up a single book by 13-digit ISBN.
    ///
    /// Returns the raw lookup document, or None when the API has no entry
    /// for the ISBN.
    async fn find_by_isbn13(&self, isbn13: &str) -> Result<Option<Value>, CatalogError>;
}

/// Factory for creating BookCatalog implementations.
pub struct CatalogFactory;

impl CatalogFactory {
    /// Create a BookCatalog based on configuration.
    pub fn create(config: CatalogConfig) -> Result<Box<dyn BookCatalog>, CatalogError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!("Creating HTTP book catalog");
                if config.client_id.is_empty() || config.client_secret.is_empty() {
                    return Err(CatalogError::Configuration(
                        "Search API credentials are required for the http provider".to_string(),
                    ));
                }
                Ok(Box::new(client::HttpCatalog::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock book catalog");
                Ok(Box::new(mock::MockCatalog::new()))
            }
            provider => Err(CatalogError::Configuration(format!(
                "Unknown catalog provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}

/// Extract a page count from an ISBN lookup document.
///
/// The lookup shape is `{item: [{itemPage, subInfo: {itemPage}}]}` with
/// the page count appearing either at the item level or under subInfo,
/// as a number or a numeric string. Non-positive and non-numeric values
/// yield None.
pub fn page_count_from_lookup(document: &Value) -> Option<i32> {
    let first = document.get("item")?.as_array()?.first()?;

    let raw = first
        .get("itemPage")
        .filter(|v| !v.is_null())
        .or_else(|| first.get("subInfo").and_then(|s| s.get("itemPage")))?;

    let numeric = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !numeric.is_finite() || numeric <= 0.0 {
        return None;
    }

    Some(numeric.trunc() as i32)
}
