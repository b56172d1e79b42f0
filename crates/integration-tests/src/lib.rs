//! Shared helpers for the Khales POS integration tests.
//!
//! Tests drive the real [`AppState`] against a scratch data directory, so
//! every scenario exercises the engine *and* the write-through persistence
//! path together.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use chrono::Utc;
use rust_decimal::Decimal;
use tempfile::TempDir;

use khales_core::ProductId;
use khales_pos::models::{CartItem, Category, Customer, Product, ProductDraft};
use khales_pos::{AppState, PosConfig};

/// A scratch application state rooted in a temp directory.
///
/// Keep the returned [`TempDir`] alive for as long as the state is used.
#[must_use]
pub fn scratch_state() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let state = AppState::load(&config_for(&dir)).unwrap();
    (dir, state)
}

/// Config pointing at a temp directory, advisor disabled.
#[must_use]
pub fn config_for(dir: &TempDir) -> PosConfig {
    PosConfig {
        data_dir: dir.path().to_path_buf(),
        advisor: None,
    }
}

/// A dress priced at `price` with the given stock.
#[must_use]
pub fn dress(price: Decimal, stock: u32) -> Product {
    ProductDraft::new()
        .name("فستان سهرة")
        .purchase_price(price / Decimal::from(2))
        .price(price)
        .category(Category::Dresses)
        .size("M")
        .stock(stock)
        .build()
        .unwrap()
}

/// A cart with a single line of `quantity` units of the given product.
#[must_use]
pub fn single_line_cart(state: &AppState, id: ProductId, quantity: u32) -> Vec<CartItem> {
    let product = state.shop().product(id).unwrap();
    vec![CartItem::from_product(product, "M", "أسود", quantity)]
}

/// A customer named `name`, optionally preferred.
#[must_use]
pub fn customer(name: &str, preferred: bool) -> Customer {
    let mut customer = Customer::new(name, "0550123456", Utc::now().date_naive());
    customer.is_preferred = preferred;
    customer
}
