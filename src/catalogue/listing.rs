//! Compendium listing

use std::io;

use tabled::builder::Builder;

use crate::{
    catalogue::Catalogue,
    products::{Product, roman},
    render::{RenderError, write_table},
};

impl Catalogue {
    /// Writes the compendium as a table, optionally only featured products.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_listing(
        &self,
        mut out: impl io::Write,
        featured_only: bool,
    ) -> Result<(), RenderError> {
        let products: Vec<&Product> = if featured_only {
            self.featured().collect()
        } else {
            self.iter().collect()
        };

        let mut builder = Builder::default();

        builder.push_record(["Folio", "Id", "Essence", "Latin Name", "Price"]);

        for product in &products {
            builder.push_record(listing_row(product));
        }

        write_table(&mut out, builder, 4..5)?;

        let noun = if products.len() == 1 {
            "essence"
        } else {
            "essences"
        };

        writeln!(out, " {} {noun}", products.len())?;

        Ok(())
    }
}

fn listing_row(product: &Product) -> [String; 5] {
    let name = if product.featured {
        format!("{} ✷", product.common_name)
    } else {
        product.common_name.clone()
    };

    [
        roman(product.folio),
        product.id.to_string(),
        name,
        product.latin_name.clone(),
        product.price.to_string(),
    ]
}
