//! Compendium
//!
//! The product catalogue the listing page adds from. Loaded once from a YAML
//! document and read-only afterwards.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalogue::fixtures::CompendiumFixture,
    products::{Product, ProductId},
};

pub mod fixtures;
pub mod listing;

const BUNDLED_COMPENDIUM: &str = include_str!("../../fixtures/compendium.yml");

/// Compendium Loading Errors
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// IO error reading the compendium file
    #[error("Failed to read compendium file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The same product id appears twice
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products in the document
    #[error("Compendium has no products")]
    Empty,
}

/// The product compendium, ordered by folio.
#[derive(Debug, Clone)]
pub struct Catalogue {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl Catalogue {
    /// The compendium bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document is malformed.
    pub fn compendium() -> Result<Self, CatalogueError> {
        Self::from_yaml_str(BUNDLED_COMPENDIUM)
    }

    /// Load a compendium from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid compendium.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading compendium");

        Self::from_yaml_str(&contents)
    }

    /// Load a compendium from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, a price is invalid,
    /// an id is repeated, products use different currencies, or there are no
    /// products.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogueError> {
        let fixture: CompendiumFixture = serde_norway::from_str(contents)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_products(products)
    }

    /// Build a compendium from already constructed products.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is repeated, products use different
    /// currencies, or there are no products.
    pub fn with_products(mut products: Vec<Product>) -> Result<Self, CatalogueError> {
        let currency = products
            .first()
            .map(|product| product.price.currency())
            .ok_or(CatalogueError::Empty)?;

        if let Some(other) = products
            .iter()
            .map(|product| product.price.currency())
            .find(|other| *other != currency)
        {
            return Err(CatalogueError::CurrencyMismatch(
                currency.iso_alpha_code.to_string(),
                other.iso_alpha_code.to_string(),
            ));
        }

        products.sort_by_key(|product| product.folio);

        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogueError::DuplicateProduct(product.id.clone()));
            }
        }

        debug!(products = products.len(), "compendium loaded");

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        let position = *self.index.get(id)?;

        self.products.get(position)
    }

    /// Products in folio order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Featured products in folio order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.featured)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always `false` for a loaded compendium.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
