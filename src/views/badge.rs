//! Header vial badge

use crate::{
    cart::{Cart, CartChange},
    store::CartObserver,
};

/// Item count shown on the header's vial button.
///
/// Counts lines, not units, matching what the storefront header displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderBadge {
    count: usize,
}

impl HeaderBadge {
    /// Number of lines in the vial.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Badge text, or `None` when the badge should be hidden.
    pub fn label(&self) -> Option<String> {
        (self.count > 0).then(|| self.count.to_string())
    }
}

impl From<&Cart> for HeaderBadge {
    fn from(cart: &Cart) -> Self {
        Self { count: cart.len() }
    }
}

impl CartObserver for HeaderBadge {
    fn on_cart_change(&mut self, _change: &CartChange, cart: &Cart) {
        *self = Self::from(cart);
    }
}
