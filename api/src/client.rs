// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the food-catalog service.

use std::sync::Arc;

use reqwest::Method;

use crate::config::CatalogConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Item, ItemDraft, ItemId};

/// Client for a remote food-catalog service.
///
/// # Example
///
/// ```ignore
/// use foods_api::{CatalogClient, CatalogConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CatalogConfig {
///     base_url: "https://catalog.example.com".to_string(),
///     ..Default::default()
/// };
///
/// let client = CatalogClient::new(config)?;
/// let items = client.list_items().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Arc<HttpClient>,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: CatalogConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Lists every item in the collection, in server response order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body doesn't decode.
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, "listing catalog items");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        Ok(resp.json().await?)
    }

    /// Gets a single item by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the item doesn't exist or the body doesn't decode.
    pub async fn get_item(&self, id: &ItemId) -> Result<Item, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%id, "fetching catalog item");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        Ok(resp.json().await?)
    }

    /// Creates a new item; the service assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails.
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        let url = self.collection_url();
        tracing::debug!(title = %draft.title, "creating catalog item");

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(draft))
            .await?;

        Ok(resp.json().await?)
    }

    /// Updates an existing item with the full item body.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn update_item(&self, item: &Item) -> Result<Item, ApiError> {
        let url = self.item_url(&item.id);
        tracing::debug!(id = %item.id, "updating catalog item");

        let resp = self
            .http
            .execute(self.http.build_request(Method::PUT, &url).json(item))
            .await?;

        Ok(resp.json().await?)
    }

    /// Deletes an item. The response body carries no meaning.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete_item(&self, id: &ItemId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%id, "deleting catalog item");

        self.http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;

        Ok(())
    }

    /// Builds the collection URL.
    fn collection_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    /// Builds the URL of a single item.
    fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.collection_url(), id.as_str())
    }
}
