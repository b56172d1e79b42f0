//! Derived read-only reporting values.
//!
//! Pure functions over the order and product collections, recomputed on
//! demand. Inputs are small and recomputation is cheap, so there is no
//! caching or invalidation layer.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::models::{Category, Order, Product};

/// Total historical sales volume: the sum of all order totals.
#[must_use]
pub fn total_sales(orders: &[Order]) -> Decimal {
    orders.iter().map(|o| o.total).sum()
}

/// Sales volume for the calendar month containing `now`.
#[must_use]
pub fn monthly_sales(orders: &[Order], now: DateTime<Utc>) -> Decimal {
    orders
        .iter()
        .filter(|o| o.date.year() == now.year() && o.date.month() == now.month())
        .map(|o| o.total)
        .sum()
}

/// Expected profit if the entire current inventory sells at list price:
/// `Σ (price − purchase_price) × stock`.
#[must_use]
pub fn expected_profit(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.unit_margin() * Decimal::from(p.stock))
        .sum()
}

/// Products at or below the given stock threshold.
#[must_use]
pub fn low_stock(products: &[Product], threshold: u32) -> Vec<&Product> {
    products.iter().filter(|p| p.stock <= threshold).collect()
}

/// How many products each category holds, in display order.
#[must_use]
pub fn category_counts(products: &[Product]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = products.iter().filter(|p| p.category == category).count();
            (category, count)
        })
        .collect()
}
