//! Views
//!
//! Consumers of the cart store: the vial badge in the header and the vial
//! drawer. Both are plain view models kept current by subscribing to a
//! [`CartStore`](crate::store::CartStore).

pub mod badge;
pub mod drawer;
