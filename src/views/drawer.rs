//! Vial drawer

use std::{io, rc::Rc};

use rusty_money::{Money, iso::Currency};
use tabled::builder::Builder;

use crate::{
    cart::{Cart, CartChange},
    catalogue::Catalogue,
    products::ProductId,
    render::{RenderError, write_table},
    store::CartObserver,
};

/// Drawer heading.
pub const TITLE: &str = "Collection Vial";

/// Copy shown when the vial holds nothing.
pub const EMPTY_MESSAGE: &str = "Your vial is currently empty.";

/// Label of the close action.
pub const CONTINUE_SHOPPING: &str = "Continue Shopping";

/// One rendered line in the drawer.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerLine {
    /// Product identifier
    pub product_id: ProductId,

    /// Display name; the product id when the product is not in the compendium
    pub name: String,

    /// Units in the vial
    pub quantity: u32,

    /// Unit price
    pub unit_price: Money<'static, Currency>,

    /// Unit price times quantity
    pub line_total: Money<'static, Currency>,
}

/// Content and open state of the vial drawer.
#[derive(Debug)]
pub struct VialDrawer {
    catalogue: Rc<Catalogue>,
    open: bool,
    lines: Vec<DrawerLine>,
    total: Money<'static, Currency>,
}

impl VialDrawer {
    /// A closed drawer showing an empty vial.
    pub fn new(catalogue: Rc<Catalogue>) -> Self {
        let total = Money::from_minor(0, catalogue.currency());

        Self {
            catalogue,
            open: false,
            lines: Vec::new(),
            total,
        }
    }

    /// A closed drawer showing the contents of `cart`.
    pub fn with_cart(catalogue: Rc<Catalogue>, cart: &Cart) -> Self {
        let mut drawer = Self::new(catalogue);
        drawer.sync(cart);
        drawer
    }

    /// Rebuild the drawer content from `cart`.
    pub fn sync(&mut self, cart: &Cart) {
        self.lines = cart
            .iter()
            .map(|item| {
                let name = self
                    .catalogue
                    .get(item.product_id().as_str())
                    .map_or_else(
                        || item.product_id().to_string(),
                        |product| product.common_name.clone(),
                    );

                DrawerLine {
                    product_id: item.product_id().clone(),
                    name,
                    quantity: item.quantity(),
                    unit_price: *item.unit_price(),
                    line_total: item.line_total(),
                }
            })
            .collect();

        self.total = cart.total();
    }

    /// Open the drawer.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the drawer ("Continue Shopping").
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Open state change requested by the presentation layer.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Rendered lines in display order.
    pub fn lines(&self) -> &[DrawerLine] {
        &self.lines
    }

    /// Vial total.
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }

    /// Whether the vial is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the drawer content.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        writeln!(out, "{TITLE}")?;

        if self.is_empty() {
            writeln!(out, "\n {EMPTY_MESSAGE}")?;
        } else {
            let mut builder = Builder::default();

            builder.push_record(["Essence", "Qty", "Unit Price", "Line Total"]);

            for line in &self.lines {
                builder.push_record([
                    line.name.clone(),
                    line.quantity.to_string(),
                    line.unit_price.to_string(),
                    line.line_total.to_string(),
                ]);
            }

            write_table(&mut out, builder, 1..4)?;

            writeln!(out, " \x1b[1mTotal:\x1b[0m {}", self.total)?;
        }

        writeln!(out, "\n [ {CONTINUE_SHOPPING} ]")?;

        Ok(())
    }
}

impl CartObserver for VialDrawer {
    fn on_cart_change(&mut self, _change: &CartChange, cart: &Cart) {
        self.sync(cart);
    }
}
