//! The `sell` command: turn cart lines into a completed sale.

use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;

use khales_core::{display_amount, CustomerId};
use khales_pos::models::CartItem;
use khales_pos::AppState;

/// Arguments for `khales sell`.
#[derive(Debug, Args)]
pub struct SellArgs {
    /// Cart line as `product-id:size:color:quantity` (repeatable)
    #[arg(long = "item", required = true)]
    pub items: Vec<String>,

    /// Customer to attribute the sale to (omit for a cash customer)
    #[arg(long)]
    pub customer: Option<CustomerId>,

    /// Payment method
    #[arg(long, value_enum, default_value = "cash")]
    pub payment: super::PaymentArg,
}

/// Complete a sale from the parsed cart lines.
///
/// The total is computed here, net of the preferred-customer discount -
/// the engine receives it precomputed, as its contract requires.
pub fn sell(state: &mut AppState, args: &SellArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = Vec::with_capacity(args.items.len());
    for spec in &args.items {
        cart.push(parse_cart_line(state, spec)?);
    }

    let gross: Decimal = cart.iter().map(CartItem::line_total).sum();
    let discount_rate = args
        .customer
        .and_then(|id| state.shop().customer(id))
        .map_or(Decimal::ZERO, |customer| customer.discount_rate());
    let total = gross * (Decimal::ONE - discount_rate);

    let receipt = state.complete_sale(&cart, args.customer, args.payment.into(), total, Utc::now())?;

    println!("تم تسجيل البيع!");
    println!("رقم الفاتورة: {}", receipt.order_number);
    println!("الزبونة: {}", receipt.customer_name);
    println!("المبلغ النهائي: {}", display_amount(receipt.total));
    Ok(())
}

/// Parse one `product-id:size:color:quantity` cart line, snapshotting the
/// product's current data.
fn parse_cart_line(
    state: &AppState,
    spec: &str,
) -> Result<CartItem, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [id, size, color, qty] = parts.as_slice() else {
        return Err(format!("سطر غير صالح (المطلوب: معرف:مقاس:لون:كمية): {spec}").into());
    };

    let product_id = id.parse()?;
    let quantity: u32 = qty.parse()?;
    let product = state
        .shop()
        .product(product_id)
        .ok_or_else(|| format!("المنتج غير موجود: {id}"))?;

    Ok(CartItem::from_product(product, *size, *color, quantity))
}
