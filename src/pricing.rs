//! Pricing

use rusty_money::{Money, iso::Currency};

use crate::items::CartItem;

/// Calculates the total price of a list of line items in `currency`.
///
/// Sums in minor units and saturates rather than overflowing. An empty slice
/// totals zero.
pub fn total_price(items: &[CartItem], currency: &'static Currency) -> Money<'static, Currency> {
    let minor = items
        .iter()
        .fold(0_i64, |acc, item| acc.saturating_add(item.line_total_minor()));

    Money::from_minor(minor, currency)
}

/// Total number of units across all line items.
pub fn total_quantity(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}
