//! Product cards: display-ready views of catalog products

use crate::error::PriceError;
use crate::pricing::{count_discount, RupiahFormatter};
use crate::types::{Product, ProductCard};

/// Map products to cards using the default exchange rate.
///
/// Output order and length match the input.
pub fn set_products_cards(products: &[Product]) -> Result<Vec<ProductCard>, PriceError> {
    RupiahFormatter::default().cards(products)
}

impl RupiahFormatter {
    /// Build one card per product with this formatter's exchange rate.
    pub fn cards(&self, products: &[Product]) -> Result<Vec<ProductCard>, PriceError> {
        products.iter().map(|p| self.card(p)).collect()
    }

    /// Build the card for a single product.
    pub fn card(&self, product: &Product) -> Result<ProductCard, PriceError> {
        Ok(ProductCard {
            id: product.id,
            title: product.title.clone(),
            discount_percentage: product.discount_percentage,
            thumbnail: product.thumbnail.clone(),
            price: self.format(product.price)?,
            after_discount: count_discount(product.price, product.discount_percentage)?,
            image: product.thumbnail.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields() {
        let product = Product {
            id: 1,
            title: "Product X".to_string(),
            price: 200.0,
            discount_percentage: 10.0,
            thumbnail: "url_image_x".to_string(),
        };
        let card = RupiahFormatter::default().card(&product).unwrap();
        assert_eq!(card.price, "Rp\u{a0}3.087.200,00");
        assert_eq!(card.after_discount, 180.0);
        assert_eq!(card.image, "url_image_x");
        assert_eq!(card.thumbnail, product.thumbnail);
    }
}
