//! Compendium Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, SGD, USD},
};
use serde::Deserialize;

use crate::{
    catalogue::CatalogueError,
    products::{Product, ProductId},
};

/// Wrapper for the compendium in YAML
#[derive(Debug, Deserialize)]
pub struct CompendiumFixture {
    /// Product entries, in any order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Botanical name
    pub latin_name: String,

    /// Common name
    pub common_name: String,

    /// Unit price (e.g., "42.00 SGD")
    pub price: String,

    /// Marketing description
    #[serde(default)]
    pub description: String,

    /// Catalogue sequence number
    pub folio: u32,

    /// Highlighted on the listing page
    #[serde(default)]
    pub featured: bool,
}

impl TryFrom<ProductFixture> for Product {
    type Error = CatalogueError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id,
            latin_name: fixture.latin_name,
            common_name: fixture.common_name,
            price: Money::from_minor(minor_units, currency),
            description: fixture.description.trim().to_string(),
            folio: fixture.folio,
            featured: fixture.featured,
        })
    }
}

/// Parse price string (e.g., "42.00 SGD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal in whole cents, or if the
/// currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogueError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(CatalogueError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| CatalogueError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| CatalogueError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() || amount.normalize().scale() > 2 {
        return Err(CatalogueError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.to_i64())
        .ok_or_else(|| CatalogueError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| CatalogueError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "SGD" => SGD,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogueError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
