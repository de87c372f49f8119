//! etalase-core: product catalog and cart utilities
//!
//! This crate holds the pure pricing logic (discounts, Rupiah formatting,
//! product cards) and the async fetchers that read products and cart
//! entries from a remote JSON API. Fetchers depend on the [`ProductSource`]
//! and [`CartSource`] traits, so callers can swap the HTTP client for
//! canned data.
//!
//! # Example
//!
//! ```
//! use etalase_core::{convert_to_rupiah, count_discount, set_products_cards, Product};
//!
//! assert_eq!(count_discount(100.0, 20.0).unwrap(), 80.0);
//! assert_eq!(convert_to_rupiah(1000.0).unwrap(), "Rp\u{a0}15.436.000,00");
//!
//! let cards = set_products_cards(&[Product {
//!     id: 1,
//!     title: "Product X".into(),
//!     price: 200.0,
//!     discount_percentage: 10.0,
//!     thumbnail: "url_image_x".into(),
//! }])
//! .unwrap();
//! assert_eq!(cards[0].image, "url_image_x");
//! assert_eq!(cards[0].after_discount, 180.0);
//! ```

pub mod cards;
pub mod cart;
pub mod config;
pub mod error;
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod http;
pub mod pricing;
pub mod types;

pub use cards::set_products_cards;
pub use config::Config;
pub use error::{ConfigError, FetchError, PriceError};
pub use fetch::{
    fetch_carts_data, fetch_products_data, CartSource, Catalog, ProductSource, StaticCatalog,
};
#[cfg(feature = "fetch")]
pub use http::ApiClient;
pub use pricing::{convert_to_rupiah, count_discount, RupiahFormatter, DEFAULT_EXCHANGE_RATE};
pub use types::{CartEntry, CurrencyDef, Product, ProductCard, ProductListResult, ProductsData, IDR};
