//! The `invoice` and `card` commands: printable HTML exports.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use khales_core::CustomerId;
use khales_pos::export::{invoice_html, membership_card_html};
use khales_pos::AppState;

/// Arguments for `khales invoice`.
#[derive(Debug, Args)]
pub struct InvoiceArgs {
    /// Order number (e.g., KH-483920-a4f1)
    pub order_number: String,

    /// File to write the HTML to (defaults to `<order-number>.html`)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Payment method to print on the invoice
    #[arg(long, value_enum)]
    pub payment: Option<super::PaymentArg>,
}

/// Arguments for `khales card`.
#[derive(Debug, Args)]
pub struct CardArgs {
    /// Customer to render a card for
    pub customer: CustomerId,

    /// File to write the HTML to (defaults to `card-<customer-id>.html`)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Export a printable invoice for an order.
pub fn invoice(state: &AppState, args: &InvoiceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let order = state
        .shop()
        .orders
        .iter()
        .find(|o| o.order_number == args.order_number)
        .ok_or_else(|| format!("الفاتورة غير موجودة: {}", args.order_number))?;

    let html = invoice_html(order, args.payment.map(Into::into));
    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.html", order.order_number)));
    fs::write(&path, html)?;
    println!("تم حفظ الفاتورة: {}", path.display());
    Ok(())
}

/// Export a printable membership card for a customer.
pub fn card(state: &AppState, args: &CardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let customer = state
        .shop()
        .customer(args.customer)
        .ok_or_else(|| format!("الزبونة غير موجودة: {}", args.customer))?;

    let html = membership_card_html(&customer.loyalty_profile());
    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("card-{}.html", customer.id)));
    fs::write(&path, html)?;
    println!("تم حفظ البطاقة: {}", path.display());
    Ok(())
}
