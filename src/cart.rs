//! Cart

use rusty_money::{
    Money,
    iso::{Currency, SGD},
};
use tracing::warn;

use crate::{
    items::CartItem,
    pricing::{total_price, total_quantity},
    products::ProductId,
};

/// Why a cart was emptied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearReason {
    /// The shopper emptied the vial.
    User,

    /// An order was placed.
    Checkout,
}

/// A change that was applied to a cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartChange {
    /// Units were added, either as a new line or onto an existing one.
    Added {
        /// Product that was added
        product_id: ProductId,

        /// Units added by this call
        quantity: u32,

        /// Quantity of the line after the addition
        line_quantity: u32,
    },

    /// A line's quantity changed without the line being added or removed.
    QuantityChanged {
        /// Product whose line changed
        product_id: ProductId,

        /// Previous quantity
        from: u32,

        /// New quantity
        to: u32,
    },

    /// A line was removed.
    Removed {
        /// Product whose line was removed
        product_id: ProductId,
    },

    /// Every line was removed.
    Cleared(ClearReason),
}

/// An ordered collection of line items in a single currency.
///
/// Lines are kept in insertion order and each product appears at most once.
/// Every line holds at least one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(SGD)
    }
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of a product, coalescing with an existing line.
    ///
    /// A quantity of zero is treated as one. A price in a currency other than
    /// the cart's is ignored. When the product is already present the
    /// existing unit price is kept.
    pub fn add(
        &mut self,
        product_id: impl Into<ProductId>,
        unit_price: Money<'static, Currency>,
        quantity: u32,
    ) -> Option<CartChange> {
        let product_id = product_id.into();
        let quantity = quantity.max(1);

        if unit_price.currency() != self.currency {
            warn!(
                %product_id,
                price_currency = unit_price.currency().iso_alpha_code,
                cart_currency = self.currency.iso_alpha_code,
                "ignoring item priced in a different currency"
            );

            return None;
        }

        let line_quantity = if let Some(line) = self.line_mut(product_id.as_str()) {
            line.add_quantity(quantity);
            line.quantity()
        } else {
            self.items
                .push(CartItem::new(product_id.clone(), unit_price, quantity));
            quantity
        };

        Some(CartChange::Added {
            product_id,
            quantity,
            line_quantity,
        })
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, product_id: &str) -> Option<CartChange> {
        let position = self.position(product_id)?;
        let removed = self.items.remove(position);

        Some(CartChange::Removed {
            product_id: removed.product_id().clone(),
        })
    }

    /// Remove a single unit of a product, dropping the line with its last unit.
    pub fn decrement(&mut self, product_id: &str) -> Option<CartChange> {
        let line = self.line_mut(product_id)?;
        let from = line.quantity();

        if from <= 1 {
            return self.remove(product_id);
        }

        line.set_quantity(from - 1);

        Some(CartChange::QuantityChanged {
            product_id: line.product_id().clone(),
            from,
            to: from - 1,
        })
    }

    /// Set the quantity of an existing line. Zero removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Option<CartChange> {
        if quantity == 0 {
            return self.remove(product_id);
        }

        let line = self.line_mut(product_id)?;
        let from = line.quantity();

        if from == quantity {
            return None;
        }

        line.set_quantity(quantity);

        Some(CartChange::QuantityChanged {
            product_id: line.product_id().clone(),
            from,
            to: quantity,
        })
    }

    /// Remove every line.
    pub fn clear(&mut self, reason: ClearReason) -> Option<CartChange> {
        if self.items.is_empty() {
            return None;
        }

        self.items.clear();

        Some(CartChange::Cleared(reason))
    }

    /// Line items in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over line items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Look up the line for a product.
    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.product_id().as_str() == product_id)
    }

    /// Sum of unit price times quantity over every line.
    pub fn total(&self) -> Money<'static, Currency> {
        total_price(&self.items, self.currency)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of units across every line.
    pub fn quantity(&self) -> u64 {
        total_quantity(&self.items)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id().as_str() == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id().as_str() == product_id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn sgd(minor: i64) -> Money<'static, Currency> {
        Money::from_minor(minor, SGD)
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::default();

        assert!(cart.is_empty());
        assert_eq!(cart.currency(), SGD);
        assert_eq!(cart.total(), sgd(0));
    }

    #[test]
    fn add_coalesces_same_product() {
        let mut cart = Cart::default();

        cart.add("lavender-5ml", sgd(4200), 1);
        let change = cart.add("lavender-5ml", sgd(4200), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item("lavender-5ml").map(CartItem::quantity), Some(3));
        assert_eq!(
            change,
            Some(CartChange::Added {
                product_id: ProductId::new("lavender-5ml"),
                quantity: 2,
                line_quantity: 3,
            })
        );
    }

    #[test]
    fn add_keeps_existing_unit_price() {
        let mut cart = Cart::default();

        cart.add("lavender-5ml", sgd(4200), 1);
        cart.add("lavender-5ml", sgd(3900), 1);

        assert_eq!(cart.total(), sgd(8400));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::default();

        cart.add("bergamot-5ml", sgd(4800), 1);
        cart.add("lavender-5ml", sgd(4200), 1);
        cart.add("bergamot-5ml", sgd(4800), 1);

        let ids: Vec<&str> = cart.iter().map(|item| item.product_id().as_str()).collect();

        assert_eq!(ids, ["bergamot-5ml", "lavender-5ml"]);
    }

    #[test]
    fn add_zero_quantity_adds_one() {
        let mut cart = Cart::default();

        cart.add("lavender-5ml", sgd(4200), 0);

        assert_eq!(cart.quantity(), 1);
    }

    #[test]
    fn add_rejects_foreign_currency() {
        let mut cart = Cart::default();

        let change = cart.add("lavender-5ml", Money::from_minor(4200, USD), 1);

        assert_eq!(change, None);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_absent_product_is_noop() {
        let mut cart = Cart::default();
        cart.add("lavender-5ml", sgd(4200), 1);
        let before = cart.clone();

        assert_eq!(cart.remove("vetiver-5ml"), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn decrement_removes_line_at_last_unit() {
        let mut cart = Cart::default();
        cart.add("lavender-5ml", sgd(4200), 2);

        assert_eq!(
            cart.decrement("lavender-5ml"),
            Some(CartChange::QuantityChanged {
                product_id: ProductId::new("lavender-5ml"),
                from: 2,
                to: 1,
            })
        );
        assert_eq!(
            cart.decrement("lavender-5ml"),
            Some(CartChange::Removed {
                product_id: ProductId::new("lavender-5ml"),
            })
        );
        assert!(cart.is_empty());
        assert_eq!(cart.decrement("lavender-5ml"), None);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add("lavender-5ml", sgd(4200), 2);

        cart.set_quantity("lavender-5ml", 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_unchanged_reports_nothing() {
        let mut cart = Cart::default();
        cart.add("lavender-5ml", sgd(4200), 2);

        assert_eq!(cart.set_quantity("lavender-5ml", 2), None);
        assert_eq!(cart.set_quantity("vetiver-5ml", 4), None);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::default();
        cart.add("lavender-5ml", sgd(4200), 1);
        cart.add("bergamot-5ml", sgd(4800), 1);

        assert_eq!(
            cart.clear(ClearReason::User),
            Some(CartChange::Cleared(ClearReason::User))
        );
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), sgd(0));
        assert_eq!(cart.clear(ClearReason::User), None);
    }

    #[test]
    fn total_sums_lines() {
        let mut cart = Cart::default();

        cart.add("lavender-5ml", sgd(4200), 1);
        cart.add("bergamot-5ml", sgd(4800), 1);

        assert_eq!(cart.total(), sgd(9000));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity(), 2);
    }
}
