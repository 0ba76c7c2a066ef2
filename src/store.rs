//! Cart Store
//!
//! The store owns the shopper's [`Cart`] and is the only way to mutate it.
//! Consumers such as the header badge and the vial drawer subscribe as
//! [`CartObserver`]s and are notified synchronously after every change, so
//! what they display never lags behind the action that caused it.

use std::{cell::RefCell, fmt, rc::Rc};

use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};
use tracing::{debug, trace, warn};

use crate::{
    cart::{Cart, CartChange, ClearReason},
    items::CartItem,
    products::{Product, ProductId},
};

new_key_type! {
    /// Subscription Key
    pub struct SubscriptionKey;
}

/// Receives cart changes from a [`CartStore`].
///
/// Called once per effective change, after the change has been applied and
/// before the mutating call returns. Calls that leave the cart untouched are
/// not reported.
pub trait CartObserver {
    /// Called with the change that was applied and the resulting cart.
    fn on_cart_change(&mut self, change: &CartChange, cart: &Cart);
}

/// Shared observers, e.g. a view that a component reads between changes.
///
/// If the view is still borrowed when the store changes, the change is not
/// delivered and a warning is logged. The view catches up on the next change
/// it receives, since every notification carries the whole cart.
impl<T: CartObserver> CartObserver for Rc<RefCell<T>> {
    fn on_cart_change(&mut self, change: &CartChange, cart: &Cart) {
        match self.try_borrow_mut() {
            Ok(mut observer) => observer.on_cart_change(change, cart),
            Err(err) => warn!(?change, %err, "observer busy, change not delivered"),
        }
    }
}

/// Session-scoped cart state with a subscription contract.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    observers: SlotMap<SubscriptionKey, Box<dyn CartObserver>>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CartStore {
    /// Create an empty store whose cart uses `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            observers: SlotMap::with_key(),
        }
    }

    /// Register an observer. It is not called for changes made before it
    /// subscribed.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) -> SubscriptionKey {
        let key = self.observers.insert(Box::new(observer));

        trace!(?key, observers = self.observers.len(), "observer subscribed");

        key
    }

    /// Remove an observer. Returns `false` if the key was not subscribed.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.observers.remove(key).is_some()
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add units of a product to the vial, coalescing with an existing line.
    ///
    /// A quantity of zero is treated as one.
    pub fn add_item(
        &mut self,
        product_id: impl Into<ProductId>,
        unit_price: Money<'static, Currency>,
        quantity: u32,
    ) {
        let change = self.cart.add(product_id, unit_price, quantity);

        self.publish(change);
    }

    /// The "add to vial" action from a product listing.
    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        self.add_item(product.id.clone(), product.price, quantity);
    }

    /// Remove the line for a product. Unknown products are ignored.
    pub fn remove_item(&mut self, product_id: &str) {
        let change = self.cart.remove(product_id);

        self.publish(change);
    }

    /// Remove one unit of a product; the line goes with its last unit.
    pub fn decrement_item(&mut self, product_id: &str) {
        let change = self.cart.decrement(product_id);

        self.publish(change);
    }

    /// Set a line's quantity. Zero removes the line; unknown products are
    /// ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        let change = self.cart.set_quantity(product_id, quantity);

        self.publish(change);
    }

    /// Empty the vial at the shopper's request.
    pub fn clear(&mut self) {
        let change = self.cart.clear(ClearReason::User);

        self.publish(change);
    }

    /// Empty the vial once an order has been placed.
    pub fn complete_checkout(&mut self) {
        let change = self.cart.clear(ClearReason::Checkout);

        self.publish(change);
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Line items in display order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Sum of unit price times quantity; zero when empty.
    pub fn total(&self) -> Money<'static, Currency> {
        self.cart.total()
    }

    /// Number of lines in the vial.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Check if the vial is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn publish(&mut self, change: Option<CartChange>) {
        let Some(change) = change else {
            return;
        };

        debug!(
            ?change,
            lines = self.cart.len(),
            total_minor = self.cart.total().to_minor_units(),
            "cart changed"
        );

        for observer in self.observers.values_mut() {
            observer.on_cart_change(&change, &self.cart);
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::SGD;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        changes: Vec<CartChange>,
        totals: Vec<i64>,
    }

    impl CartObserver for Recorder {
        fn on_cart_change(&mut self, change: &CartChange, cart: &Cart) {
            self.changes.push(change.clone());
            self.totals.push(cart.total().to_minor_units());
        }
    }

    type Log = Rc<RefCell<Recorder>>;

    fn recorder(store: &mut CartStore) -> (SubscriptionKey, Log) {
        let log: Log = Rc::default();
        let key = store.subscribe(Rc::clone(&log));

        (key, log)
    }

    fn sgd(minor: i64) -> Money<'static, Currency> {
        Money::from_minor(minor, SGD)
    }

    #[test]
    fn add_item_notifies_observers() {
        let mut store = CartStore::default();
        let (_key, log) = recorder(&mut store);

        store.add_item("lavender-5ml", sgd(4200), 1);

        assert_eq!(
            log.borrow().changes,
            [CartChange::Added {
                product_id: ProductId::new("lavender-5ml"),
                quantity: 1,
                line_quantity: 1,
            }]
        );
    }

    #[test]
    fn observers_see_resulting_cart() {
        let mut store = CartStore::default();
        let (_key, log) = recorder(&mut store);

        store.add_item("lavender-5ml", sgd(4200), 1);
        store.add_item("bergamot-5ml", sgd(4800), 1);
        store.remove_item("lavender-5ml");

        assert_eq!(log.borrow().totals, [4200, 9000, 4800]);
    }

    #[test]
    fn noop_mutations_do_not_notify() {
        let mut store = CartStore::default();
        let (_key, log) = recorder(&mut store);

        store.remove_item("vetiver-5ml");
        store.decrement_item("vetiver-5ml");
        store.set_quantity("vetiver-5ml", 3);
        store.clear();
        store.complete_checkout();

        assert!(log.borrow().changes.is_empty());
    }

    #[test]
    fn unsubscribed_observer_is_not_notified() {
        let mut store = CartStore::default();
        let (key, log) = recorder(&mut store);

        assert!(store.unsubscribe(key));
        assert!(!store.unsubscribe(key));

        store.add_item("lavender-5ml", sgd(4200), 1);

        assert!(log.borrow().changes.is_empty());
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn checkout_clears_with_reason() {
        let mut store = CartStore::default();
        store.add_item("lavender-5ml", sgd(4200), 1);
        let (_key, log) = recorder(&mut store);

        store.complete_checkout();

        assert!(store.is_empty());
        assert_eq!(
            log.borrow().changes,
            [CartChange::Cleared(ClearReason::Checkout)]
        );
    }

    #[test]
    fn borrowed_shared_observer_is_skipped_then_catches_up() {
        let mut store = CartStore::default();
        let (_key, log) = recorder(&mut store);
        let (_other, other_log) = recorder(&mut store);

        {
            let _reading = log.borrow();
            store.add_item("lavender-5ml", sgd(4200), 1);
        }

        assert!(log.borrow().changes.is_empty(), "busy observer was notified");
        assert_eq!(other_log.borrow().totals, [4200]);

        store.add_item("bergamot-5ml", sgd(4800), 1);

        assert_eq!(log.borrow().totals, [9000]);
    }

    #[test]
    fn every_observer_is_notified() {
        let mut store = CartStore::default();
        let (_first, first_log) = recorder(&mut store);
        let (_second, second_log) = recorder(&mut store);

        store.add_item("lavender-5ml", sgd(4200), 2);
        store.decrement_item("lavender-5ml");

        assert_eq!(first_log.borrow().changes.len(), 2);
        assert_eq!(first_log.borrow().changes, second_log.borrow().changes);
    }
}
