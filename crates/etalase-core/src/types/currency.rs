//! Currency display conventions
//!
//! A [`CurrencyDef`] describes how amounts in one currency are rendered for
//! one locale. Formatting lives here so every display path agrees on it.

use rust_decimal::{Decimal, RoundingStrategy};

/// Display metadata for a currency in a given locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyDef {
    /// ISO 4217 code (e.g., "IDR")
    pub code: &'static str,
    /// BCP 47 locale the separators follow (e.g., "id-ID")
    pub locale: &'static str,
    /// Display symbol (e.g., "Rp")
    pub symbol: &'static str,
    /// Inserted between symbol and digits
    pub symbol_spacing: &'static str,
    /// Thousands separator
    pub grouping_separator: char,
    /// Separator before the fraction digits
    pub decimal_separator: char,
    /// Number of fraction digits always shown
    pub fraction_digits: u32,
}

/// Indonesian Rupiah as rendered by the id-ID locale: `Rp 15.436.000,00`,
/// with a no-break space after the symbol.
///
/// Two fraction digits follow the CLDR 47 currency data (ICU 77 and
/// earlier); CLDR 48 lowers IDR to zero fraction digits.
pub static IDR: CurrencyDef = CurrencyDef {
    code: "IDR",
    locale: "id-ID",
    symbol: "Rp",
    symbol_spacing: "\u{a0}",
    grouping_separator: '.',
    decimal_separator: ',',
    fraction_digits: 2,
};

impl CurrencyDef {
    /// Format an amount in this currency.
    ///
    /// Rounds half away from zero to `fraction_digits`. Any amount below
    /// zero gets a leading `-` in front of the symbol, even when its
    /// magnitude rounds to zero.
    pub fn format(&self, amount: Decimal) -> String {
        let negative = amount.is_sign_negative() && !amount.is_zero();
        self.format_signed(negative, amount.abs())
    }

    /// Format `magnitude`, prefixed with `-` when `negative`.
    pub fn format_signed(&self, negative: bool, magnitude: Decimal) -> String {
        let rounded = magnitude
            .abs()
            .round_dp_with_strategy(self.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.*}", self.fraction_digits as usize, rounded);
        match digits.split_once('.') {
            Some((int_part, frac_part)) => self.render(negative, int_part, frac_part),
            None => self.render(negative, &digits, ""),
        }
    }

    /// Format a magnitude outside the `Decimal` range.
    ///
    /// Such values carry no fractional part, so the fraction is all zeros.
    /// Infinity renders as `∞`.
    pub fn format_signed_f64(&self, negative: bool, magnitude: f64) -> String {
        let magnitude = magnitude.abs();
        if magnitude.is_infinite() {
            return self.render_raw(negative, "\u{221e}");
        }
        let int_part = format!("{}", magnitude.round());
        let frac_part = "0".repeat(self.fraction_digits as usize);
        self.render(negative, &int_part, &frac_part)
    }

    fn render(&self, negative: bool, int_part: &str, frac_part: &str) -> String {
        let mut body = group_digits(int_part, self.grouping_separator);
        if !frac_part.is_empty() {
            body.push(self.decimal_separator);
            body.push_str(frac_part);
        }
        self.render_raw(negative, &body)
    }

    fn render_raw(&self, negative: bool, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(self.symbol_spacing);
        out.push_str(body);
        out
    }
}

/// Insert `separator` every three digits from the right
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
