//! Items

use rusty_money::{Money, iso::Currency};

use crate::products::ProductId;

/// A line item in the cart: one product and how many units of it.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    product_id: ProductId,
    unit_price: Money<'static, Currency>,
    quantity: u32,
}

impl CartItem {
    /// Creates a new line item. A quantity of zero is coerced to one.
    pub fn new(
        product_id: impl Into<ProductId>,
        unit_price: Money<'static, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            unit_price,
            quantity: quantity.max(1),
        }
    }

    /// Returns the product identifier
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Returns the quantity (always at least one)
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity, in minor units.
    pub fn line_total_minor(&self) -> i64 {
        self.unit_price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity))
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money<'static, Currency> {
        Money::from_minor(self.line_total_minor(), self.unit_price.currency())
    }

    pub(crate) fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Sets the quantity. Callers must remove the line instead of passing zero.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity >= 1, "line items hold at least one unit");

        self.quantity = quantity.max(1);
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::SGD;

    use super::*;

    #[test]
    fn zero_quantity_is_coerced_to_one() {
        let item = CartItem::new("lavender-5ml", Money::from_minor(4200, SGD), 0);

        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn line_total_multiplies_unit_price() {
        let item = CartItem::new("bergamot-5ml", Money::from_minor(4800, SGD), 3);

        assert_eq!(item.line_total(), Money::from_minor(14_400, SGD));
    }

    #[test]
    fn add_quantity_saturates() {
        let mut item = CartItem::new("neroli-5ml", Money::from_minor(9600, SGD), u32::MAX);

        item.add_quantity(5);

        assert_eq!(item.quantity(), u32::MAX);
    }
}
