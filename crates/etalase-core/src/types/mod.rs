//! Catalog, cart and currency types

pub mod currency;
mod product;

pub use currency::{CurrencyDef, IDR};
pub use product::{CartEntry, Product, ProductCard, ProductListResult, ProductsData};
