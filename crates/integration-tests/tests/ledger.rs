//! Credit-ledger invariants across sales and manual entries.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use rust_decimal_macros::dec;

use khales_pos::models::{LedgerEntryKind, PaymentMethod};

use khales_integration_tests::{customer, dress, scratch_state, single_line_cart};

// Scenario: a manual payment of 500 drops the balance by 500 and records -500.
#[test]
fn manual_payment_entry_reduces_balance() {
    let (_dir, mut state) = scratch_state();
    let id = state.add_customer(customer("نور", false)).unwrap();

    state
        .record_ledger_entry(id, LedgerEntryKind::Debt, dec!(2000), None, Utc::now())
        .unwrap();
    let balance = state
        .record_ledger_entry(
            id,
            LedgerEntryKind::Payment,
            dec!(500),
            Some("دفعة".to_string()),
            Utc::now(),
        )
        .unwrap();

    assert_eq!(balance, dec!(1500));
    let customer = state.shop().customer(id).unwrap();
    assert_eq!(customer.transactions.first().unwrap().amount, dec!(-500));
}

// The balance must reconcile with the ledger after any mix of mutation paths.
#[test]
fn balance_reconciles_after_sales_and_manual_entries() {
    let (_dir, mut state) = scratch_state();
    let product_id = state.add_product(dress(dec!(1000), 50)).unwrap();
    let customer_id = state.add_customer(customer("أمينة", false)).unwrap();

    let cart = single_line_cart(&state, product_id, 1);
    state
        .complete_sale(&cart, Some(customer_id), PaymentMethod::Credit, dec!(1000), Utc::now())
        .unwrap();
    state
        .record_ledger_entry(customer_id, LedgerEntryKind::Payment, dec!(400), None, Utc::now())
        .unwrap();
    let cart = single_line_cart(&state, product_id, 2);
    state
        .complete_sale(&cart, Some(customer_id), PaymentMethod::Credit, dec!(2000), Utc::now())
        .unwrap();
    state
        .record_ledger_entry(customer_id, LedgerEntryKind::Payment, dec!(2600), None, Utc::now())
        .unwrap();

    let customer = state.shop().customer(customer_id).unwrap();
    assert!(customer.credit_is_consistent());
    assert_eq!(customer.total_credit, dec!(0));
    assert_eq!(customer.transactions.len(), 4);
}

// Overpayment drives the balance negative and stays consistent.
#[test]
fn overpayment_goes_negative() {
    let (_dir, mut state) = scratch_state();
    let id = state.add_customer(customer("هدى", false)).unwrap();

    let balance = state
        .record_ledger_entry(id, LedgerEntryKind::Payment, dec!(300), None, Utc::now())
        .unwrap();

    assert_eq!(balance, dec!(-300));
    assert!(state.shop().customer(id).unwrap().credit_is_consistent());
}

// Cash and card sales never touch the ledger, even for known customers.
#[test]
fn non_credit_sales_skip_the_ledger() {
    let (_dir, mut state) = scratch_state();
    let product_id = state.add_product(dress(dec!(1000), 10)).unwrap();
    let customer_id = state.add_customer(customer("سلمى", true)).unwrap();

    for payment in [PaymentMethod::Cash, PaymentMethod::Card] {
        let cart = single_line_cart(&state, product_id, 1);
        state
            .complete_sale(&cart, Some(customer_id), payment, dec!(900), Utc::now())
            .unwrap();
    }

    let customer = state.shop().customer(customer_id).unwrap();
    assert!(customer.transactions.is_empty());
    assert_eq!(customer.total_credit, dec!(0));
    assert_eq!(state.shop().orders.len(), 2);
}
