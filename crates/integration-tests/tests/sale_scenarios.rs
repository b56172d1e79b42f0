//! End-to-end sale scenarios through the full state container.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use rust_decimal_macros::dec;

use khales_core::CustomerId;
use khales_pos::engine::CASH_CUSTOMER_NAME;
use khales_pos::models::{OrderStatus, PaymentMethod};

use khales_integration_tests::{customer, dress, scratch_state, single_line_cart};

// Scenario: anonymous cash sale of two units.
#[test]
fn cash_sale_decrements_stock_and_records_order() {
    let (_dir, mut state) = scratch_state();
    let id = state.add_product(dress(dec!(1000), 5)).unwrap();

    let cart = single_line_cart(&state, id, 2);
    let receipt = state
        .complete_sale(&cart, None, PaymentMethod::Cash, dec!(2000), Utc::now())
        .unwrap();

    assert_eq!(state.shop().product(id).unwrap().stock, 3);
    assert_eq!(receipt.customer_name, CASH_CUSTOMER_NAME);

    let order = state.shop().orders.first().unwrap();
    assert_eq!(order.total, dec!(2000));
    assert_eq!(order.customer_name, CASH_CUSTOMER_NAME);
    assert_eq!(order.status, OrderStatus::Delivered);

    let notification = state.shop().notifications.first().unwrap();
    assert!(!notification.is_read);
}

// Scenario: oversell clamps stock at zero instead of failing the sale.
#[test]
fn oversell_floors_stock_at_zero() {
    let (_dir, mut state) = scratch_state();
    let id = state.add_product(dress(dec!(1000), 1)).unwrap();

    let cart = single_line_cart(&state, id, 2);
    state
        .complete_sale(&cart, None, PaymentMethod::Cash, dec!(2000), Utc::now())
        .unwrap();

    assert_eq!(state.shop().product(id).unwrap().stock, 0);
    assert_eq!(state.shop().orders.len(), 1);
}

// Scenario: preferred customer on credit, 10% discount pre-applied.
#[test]
fn credit_sale_accrues_discounted_total_to_ledger() {
    let (_dir, mut state) = scratch_state();
    let product_id = state.add_product(dress(dec!(1000), 5)).unwrap();
    let customer_id = state.add_customer(customer("ليلى", true)).unwrap();

    let cart = single_line_cart(&state, product_id, 2);
    let gross = dec!(2000);
    let total = gross * (dec!(1) - state.shop().customer(customer_id).unwrap().discount_rate());
    assert_eq!(total, dec!(1800));

    state
        .complete_sale(&cart, Some(customer_id), PaymentMethod::Credit, total, Utc::now())
        .unwrap();

    let customer = state.shop().customer(customer_id).unwrap();
    assert_eq!(customer.total_credit, dec!(1800));
    let newest = customer.transactions.first().unwrap();
    assert_eq!(newest.amount, dec!(1800));
    assert!(newest.note.contains("دين شراء"));
    assert!(customer.credit_is_consistent());

    assert_eq!(state.shop().orders.first().unwrap().customer_name, "ليلى");
}

// Scenario: credit payment with an unresolvable customer still completes,
// attributed to the cash customer, with no ledger entry anywhere.
#[test]
fn credit_sale_with_unknown_customer_falls_back_to_cash_name() {
    let (_dir, mut state) = scratch_state();
    let product_id = state.add_product(dress(dec!(1000), 5)).unwrap();
    let bystander = state.add_customer(customer("سارة", false)).unwrap();

    let cart = single_line_cart(&state, product_id, 1);
    let receipt = state
        .complete_sale(
            &cart,
            Some(CustomerId::generate()),
            PaymentMethod::Credit,
            dec!(1000),
            Utc::now(),
        )
        .unwrap();

    assert_eq!(receipt.customer_name, CASH_CUSTOMER_NAME);
    assert_eq!(
        state.shop().orders.first().unwrap().customer_name,
        CASH_CUSTOMER_NAME
    );
    assert!(state
        .shop()
        .customer(bystander)
        .unwrap()
        .transactions
        .is_empty());
}

// Scenario: deleting a product leaves past orders untouched.
#[test]
fn product_deletion_preserves_order_history() {
    let (_dir, mut state) = scratch_state();
    let id = state.add_product(dress(dec!(1000), 5)).unwrap();
    state.toggle_favorite(id).unwrap();

    let cart = single_line_cart(&state, id, 1);
    state
        .complete_sale(&cart, None, PaymentMethod::Cash, dec!(1000), Utc::now())
        .unwrap();
    let order_before = state.shop().orders.first().unwrap().clone();

    state.delete_product(id, Utc::now()).unwrap();

    assert!(state.shop().product(id).is_none());
    assert!(state.shop().favorites.is_empty());
    assert_eq!(state.shop().orders.first().unwrap(), &order_before);
    assert_eq!(
        order_before.items.first().unwrap().name,
        "فستان سهرة"
    );
}

// Order immutability: editing the product later never rewrites the snapshot.
#[test]
fn order_snapshot_survives_product_edits() {
    let (_dir, mut state) = scratch_state();
    let id = state.add_product(dress(dec!(1000), 5)).unwrap();

    let cart = single_line_cart(&state, id, 1);
    state
        .complete_sale(&cart, None, PaymentMethod::Cash, dec!(1000), Utc::now())
        .unwrap();

    let mut renamed = dress(dec!(9999), 1);
    renamed.name = "اسم جديد".to_string();
    state.update_product(id, renamed).unwrap();

    let item = state.shop().orders.first().unwrap().items.first().unwrap();
    assert_eq!(item.name, "فستان سهرة");
    assert_eq!(item.price, dec!(1000));
}
