//! Cinemeta year-catalog client.
//!
//! Serves the public per-year catalogs at cinemeta-catalogs.strem.io, e.g.
//! `/year/catalog/movie/year/genre=2024&skip=50.json`.

use tracing::debug;

use annum_core::types::ContentType;

use crate::CatalogError;
use crate::source::CatalogSource;

const DEFAULT_BASE_URL: &str = "https://cinemeta-catalogs.strem.io/year/catalog";

pub struct CinemetaClient {
    base_url: String,
    client: reqwest::Client,
}

impl CinemetaClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Page address in the year-catalog scheme. The selectors live in the
    /// path, not in a query string.
    fn page_url(&self, content_type: ContentType, year: &str, skip: u32) -> String {
        format!(
            "{}/{}/year/genre={}&skip={}.json",
            self.base_url, content_type, year, skip
        )
    }
}

impl Default for CinemetaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogSource for CinemetaClient {
    async fn fetch_page(
        &self,
        content_type: ContentType,
        year: &str,
        skip: u32,
    ) -> Result<Vec<serde_json::Value>, CatalogError> {
        let url = self.page_url(content_type, year, skip);
        debug!(url = %url, "cinemeta request");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Upstream(format!(
                "cinemeta returned {}",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| CatalogError::Upstream(format!("parse JSON: {e}")))?;

        Ok(metas_page(&body))
    }
}

/// Pull the `metas` array out of an upstream body. Any other shape counts
/// as an empty page.
fn metas_page(body: &serde_json::Value) -> Vec<serde_json::Value> {
    body["metas"].as_array().cloned().unwrap_or_default()
}
