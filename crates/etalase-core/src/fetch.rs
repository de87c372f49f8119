//! Product and cart fetchers
//!
//! The fetch functions take any [`ProductSource`] / [`CartSource`], so the
//! network client ([`ApiClient`](crate::ApiClient) with the "fetch" feature)
//! and in-memory data ([`StaticCatalog`]) are interchangeable.

use crate::error::FetchError;
use crate::types::{CartEntry, Product, ProductListResult, ProductsData};
use async_trait::async_trait;

/// Where products come from
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// One product by id. A missing product is [`FetchError::NotFound`].
    async fn product(&self, id: u64) -> Result<Product, FetchError>;

    /// The default listing with the backend-reported total.
    async fn products(&self) -> Result<ProductListResult, FetchError>;
}

/// Where cart entries come from
#[async_trait]
pub trait CartSource: Send + Sync {
    async fn carts(&self) -> Result<Vec<CartEntry>, FetchError>;
}

/// A source of both products and carts
pub trait Catalog: ProductSource + CartSource {}

impl<T: ProductSource + CartSource + ?Sized> Catalog for T {}

/// Fetch one product when `id` is given, the default listing otherwise.
///
/// A product whose id differs from the requested one counts as not found.
/// The listing is returned unsliced; apply any limit afterwards with
/// [`ProductListResult::first`].
pub async fn fetch_products_data<S>(source: &S, id: Option<u64>) -> Result<ProductsData, FetchError>
where
    S: ProductSource + ?Sized,
{
    match id {
        Some(id) => {
            let product = source.product(id).await?;
            if product.id != id {
                tracing::warn!(requested = id, received = product.id, "product id mismatch");
                return Err(FetchError::NotFound { id });
            }
            Ok(ProductsData::Single(product))
        }
        None => {
            let list = source.products().await?;
            tracing::debug!(
                count = list.products.len(),
                total = list.total,
                "fetched product listing"
            );
            Ok(ProductsData::List(list))
        }
    }
}

/// Fetch cart entries as the source returns them.
pub async fn fetch_carts_data<S>(source: &S) -> Result<Vec<CartEntry>, FetchError>
where
    S: CartSource + ?Sized,
{
    let entries = source.carts().await?;
    tracing::debug!(count = entries.len(), "fetched cart entries");
    Ok(entries)
}

/// In-memory products and carts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    pub products: Vec<Product>,
    pub carts: Vec<CartEntry>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, carts: Vec<CartEntry>) -> Self {
        Self { products, carts }
    }

    /// A small built-in catalog for offline use
    pub fn sample() -> Self {
        let product = |id: u64, title: &str, price: f64, discount_percentage: f64| Product {
            id,
            title: title.to_string(),
            price,
            discount_percentage,
            thumbnail: format!("https://cdn.dummyjson.com/products/images/{id}/thumbnail.png"),
        };
        let entry = |id: u64, product_id: u64, quantity: u64| CartEntry {
            id,
            product_id,
            quantity,
        };

        Self {
            products: vec![
                product(1, "Essence Mascara Lash Princess", 9.99, 7.17),
                product(2, "Eyeshadow Palette with Mirror", 19.99, 5.5),
                product(3, "Powder Canister", 14.99, 18.14),
                product(4, "Red Lipstick", 12.99, 19.03),
                product(5, "Red Nail Polish", 8.99, 2.46),
            ],
            carts: vec![
                entry(1, 1, 2),
                entry(1, 3, 1),
                entry(2, 2, 1),
                entry(2, 4, 3),
                entry(3, 5, 1),
            ],
        }
    }
}

#[async_trait]
impl ProductSource for StaticCatalog {
    async fn product(&self, id: u64) -> Result<Product, FetchError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(FetchError::NotFound { id })
    }

    async fn products(&self) -> Result<ProductListResult, FetchError> {
        Ok(ProductListResult {
            products: self.products.clone(),
            total: self.products.len() as u64,
        })
    }
}

#[async_trait]
impl CartSource for StaticCatalog {
    async fn carts(&self) -> Result<Vec<CartEntry>, FetchError> {
        Ok(self.carts.clone())
    }
}
