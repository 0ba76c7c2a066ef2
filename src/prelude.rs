//! Atelier prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartChange, ClearReason},
    catalogue::{Catalogue, CatalogueError},
    items::CartItem,
    products::{Product, ProductId},
    render::RenderError,
    store::{CartObserver, CartStore, SubscriptionKey},
    views::{badge::HeaderBadge, drawer::VialDrawer},
};
