//! Discount and currency conversion for display prices

use crate::error::PriceError;
use crate::types::{CurrencyDef, IDR};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Rupiah per unit of catalog price used when no rate is configured
pub const DEFAULT_EXCHANGE_RATE: f64 = 15436.0;

/// Price after taking `discount_percentage` percent off.
///
/// No rounding is applied. Non-finite inputs are rejected rather than
/// propagated as NaN.
///
/// ```
/// use etalase_core::count_discount;
/// assert_eq!(count_discount(100.0, 20.0), Ok(80.0));
/// assert_eq!(count_discount(49.5, 0.0), Ok(49.5));
/// ```
pub fn count_discount(price: f64, discount_percentage: f64) -> Result<f64, PriceError> {
    let price = PriceError::check_finite("price", price)?;
    let discount_percentage = PriceError::check_finite("discount_percentage", discount_percentage)?;
    Ok(price - price * (discount_percentage / 100.0))
}

/// Convert a catalog price to Rupiah using [`DEFAULT_EXCHANGE_RATE`] and
/// format it the id-ID way.
///
/// ```
/// use etalase_core::convert_to_rupiah;
/// assert_eq!(convert_to_rupiah(0.0).unwrap(), "Rp\u{a0}0,00");
/// assert_eq!(convert_to_rupiah(-1000.0).unwrap(), "-Rp\u{a0}15.436.000,00");
/// ```
pub fn convert_to_rupiah(amount: f64) -> Result<String, PriceError> {
    RupiahFormatter::default().format(amount)
}

/// Rupiah formatter with a configurable exchange rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RupiahFormatter {
    rate: Decimal,
    currency: &'static CurrencyDef,
}

impl RupiahFormatter {
    /// Create a formatter converting at `rate` Rupiah per catalog unit.
    pub fn new(rate: f64) -> Result<Self, PriceError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PriceError::InvalidRate(rate));
        }
        let rate = Decimal::from_f64(rate).ok_or(PriceError::InvalidRate(rate))?;
        Ok(Self {
            rate,
            currency: &IDR,
        })
    }

    /// The exchange rate in use
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Convert `amount` and render it as a currency string.
    ///
    /// The sign comes from `amount` itself, so a tiny negative amount still
    /// renders with a minus sign. Products beyond the `Decimal` range are
    /// formatted from the `f64` product instead.
    pub fn format(&self, amount: f64) -> Result<String, PriceError> {
        let amount = PriceError::check_finite("amount", amount)?;
        let negative = amount < 0.0;
        let magnitude = amount.abs();
        let converted = Decimal::from_f64(magnitude).and_then(|a| a.checked_mul(self.rate));
        let formatted = match converted {
            Some(converted) => self.currency.format_signed(negative, converted),
            None => {
                let rate = self.rate.to_f64().unwrap_or(DEFAULT_EXCHANGE_RATE);
                self.currency.format_signed_f64(negative, magnitude * rate)
            }
        };
        Ok(formatted)
    }
}

impl Default for RupiahFormatter {
    fn default() -> Self {
        Self {
            rate: Decimal::from(DEFAULT_EXCHANGE_RATE as i64),
            currency: &IDR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_discount_basic() {
        assert_eq!(count_discount(100.0, 20.0), Ok(80.0));
        assert_eq!(count_discount(1000.0, 0.0), Ok(1000.0));
        assert_eq!(count_discount(200.0, 100.0), Ok(0.0));
    }

    #[test]
    fn test_count_discount_no_rounding() {
        let price = 9.99;
        let pct = 7.17;
        assert_eq!(count_discount(price, pct), Ok(price - price * (pct / 100.0)));
    }

    #[test]
    fn test_count_discount_rejects_non_finite() {
        assert!(matches!(
            count_discount(f64::NAN, 10.0),
            Err(PriceError::NotFinite { field: "price", .. })
        ));
        assert!(matches!(
            count_discount(10.0, f64::INFINITY),
            Err(PriceError::NotFinite {
                field: "discount_percentage",
                ..
            })
        ));
    }

    #[test]
    fn test_convert_default_rate() {
        assert_eq!(convert_to_rupiah(1000.0).unwrap(), "Rp\u{a0}15.436.000,00");
        assert_eq!(convert_to_rupiah(0.0).unwrap(), "Rp\u{a0}0,00");
        assert_eq!(convert_to_rupiah(-1000.0).unwrap(), "-Rp\u{a0}15.436.000,00");
    }

    #[test]
    fn test_convert_custom_rate() {
        let formatter = RupiahFormatter::new(16000.0).unwrap();
        assert_eq!(formatter.format(2.5).unwrap(), "Rp\u{a0}40.000,00");
    }

    #[test]
    fn test_invalid_rates() {
        assert_eq!(RupiahFormatter::new(0.0), Err(PriceError::InvalidRate(0.0)));
        assert_eq!(RupiahFormatter::new(-1.0), Err(PriceError::InvalidRate(-1.0)));
        assert!(RupiahFormatter::new(f64::NAN).is_err());
    }

    #[test]
    fn test_convert_rejects_non_finite() {
        assert!(matches!(
            convert_to_rupiah(f64::NEG_INFINITY),
            Err(PriceError::NotFinite { field: "amount", .. })
        ));
    }

    #[test]
    fn test_convert_beyond_decimal_range() {
        let formatter = RupiahFormatter::new(1.0).unwrap();
        assert_eq!(
            formatter.format(1e30).unwrap(),
            "Rp\u{a0}1.000.000.000.000.000.000.000.000.000.000,00"
        );
        assert_eq!(
            formatter.format(-1e30).unwrap(),
            "-Rp\u{a0}1.000.000.000.000.000.000.000.000.000.000,00"
        );

        let huge = convert_to_rupiah(1e30).unwrap();
        assert!(huge.starts_with("Rp\u{a0}15.43"), "{huge}");
        assert!(huge.ends_with(",00"), "{huge}");
        assert!(convert_to_rupiah(1e25).is_ok());
        assert_eq!(convert_to_rupiah(f64::MAX).unwrap(), "Rp\u{a0}\u{221e}");
    }

    #[test]
    fn test_convert_tiny_negative_keeps_sign() {
        assert_eq!(convert_to_rupiah(-1e-7).unwrap(), "-Rp\u{a0}0,00");
        assert_eq!(convert_to_rupiah(-0.0).unwrap(), "Rp\u{a0}0,00");
    }
}
