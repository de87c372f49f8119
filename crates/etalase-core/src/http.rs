//! HTTP product/cart source (requires "fetch" feature)
//!
//! Talks to a dummyjson-shaped API:
//! - `GET /products/{id}` returns one product, 404 when absent
//! - `GET /products` returns `{ "products": [...], "total": n }`
//! - `GET /carts` returns `{ "carts": [ { "id": c, "products": [...] } ] }`, each line
//!   in a cart's `products` carrying `{ "id": p, "quantity": q }`

use crate::config::Config;
use crate::error::FetchError;
use crate::fetch::{CartSource, ProductSource};
use crate::types::{CartEntry, Product, ProductListResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize)]
struct CartsResponse {
    carts: Vec<ApiCart>,
}

#[derive(Deserialize)]
struct ApiCart {
    id: u64,
    products: Vec<ApiCartLine>,
}

#[derive(Deserialize)]
struct ApiCartLine {
    id: u64,
    quantity: u64,
}

impl CartsResponse {
    /// One entry per cart line, carts in response order
    fn into_entries(self) -> Vec<CartEntry> {
        self.carts
            .into_iter()
            .flat_map(|cart| {
                cart.products.into_iter().map(move |line| CartEntry {
                    id: cart.id,
                    product_id: line.id,
                    quantity: line.quantity,
                })
            })
            .collect()
    }
}

/// Client for the remote product API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use an existing `reqwest::Client` (shares its connection pool).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| FetchError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn product(&self, id: u64) -> Result<Product, FetchError> {
        match self.get_json(&format!("products/{id}")).await {
            Err(FetchError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(FetchError::NotFound { id })
            }
            other => other,
        }
    }

    async fn products(&self) -> Result<ProductListResult, FetchError> {
        self.get_json("products").await
    }
}

#[async_trait]
impl CartSource for ApiClient {
    async fn carts(&self) -> Result<Vec<CartEntry>, FetchError> {
        let response: CartsResponse = self.get_json("carts").await?;
        Ok(response.into_entries())
    }
}
