//! Atelier
//!
//! The collection vial (shopping cart) behind the Atelier Arôme storefront:
//! an ordered, coalescing cart model, an observable store that the header
//! badge and vial drawer subscribe to, and the product compendium they read
//! names and prices from.

pub mod cart;
pub mod catalogue;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod render;
pub mod store;
pub mod views;
