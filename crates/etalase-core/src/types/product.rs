//! Records read from the product API and the views derived from them

use serde::{Deserialize, Serialize};

/// A catalog item as returned by the API.
///
/// Fields the API sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub thumbnail: String,
}

/// Display-ready projection of a [`Product`].
///
/// `price` holds the formatted Rupiah string, `after_discount` the
/// discounted raw price and `image` a copy of the product thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    #[serde(rename = "discountPercentage")]
    pub discount_percentage: f64,
    pub thumbnail: String,
    pub price: String,
    pub after_discount: f64,
    pub image: String,
}

/// A single line in a shopping cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: u64,
    pub product_id: u64,
    pub quantity: u64,
}

/// The default product listing.
///
/// `total` is the count the backend reports, which can exceed
/// `products.len()` when the backend pages its response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResult {
    pub products: Vec<Product>,
    pub total: u64,
}

impl ProductListResult {
    /// First `limit` products, or all of them if there are fewer.
    pub fn first(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Result of [`fetch_products_data`](crate::fetch_products_data): one
/// product when an id was requested, the listing otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductsData {
    Single(Product),
    List(ProductListResult),
}

impl ProductsData {
    pub fn into_product(self) -> Option<Product> {
        match self {
            ProductsData::Single(product) => Some(product),
            ProductsData::List(_) => None,
        }
    }

    pub fn into_list(self) -> Option<ProductListResult> {
        match self {
            ProductsData::List(list) => Some(list),
            ProductsData::Single(_) => None,
        }
    }
}
