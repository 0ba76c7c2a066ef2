//! Products

use std::{borrow::Borrow, fmt};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Identifier of a purchasable product variant (e.g. `lavender-5ml`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A compendium entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Botanical name (e.g. `Lavandula angustifolia`)
    pub latin_name: String,

    /// Common name (e.g. `Lavender`)
    pub common_name: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Marketing description
    pub description: String,

    /// Catalogue sequence number
    pub folio: u32,

    /// Whether the product is highlighted on the listing page
    pub featured: bool,
}

impl Product {
    /// Folio label as shown in the storefront, e.g. `Folio IV`.
    pub fn folio_label(&self) -> String {
        format!("Folio {}", roman(self.folio))
    }
}

/// Upper-case Roman numeral for `n`; zero renders as an empty string.
pub fn roman(mut n: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();

    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::SGD;

    use super::*;

    #[test]
    fn roman_numerals() {
        assert_eq!(roman(1), "I");
        assert_eq!(roman(4), "IV");
        assert_eq!(roman(9), "IX");
        assert_eq!(roman(14), "XIV");
        assert_eq!(roman(724), "DCCXXIV");
        assert_eq!(roman(2024), "MMXXIV");
        assert_eq!(roman(0), "");
    }

    #[test]
    fn folio_label_uses_roman_numerals() {
        let product = Product {
            id: ProductId::new("lavender-5ml"),
            latin_name: "Lavandula angustifolia".to_string(),
            common_name: "Lavender".to_string(),
            price: Money::from_minor(4200, SGD),
            description: String::new(),
            folio: 4,
            featured: false,
        };

        assert_eq!(product.folio_label(), "Folio IV");
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::from("bergamot-5ml").to_string(), "bergamot-5ml");
    }
}
