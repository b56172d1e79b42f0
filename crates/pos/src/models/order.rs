//! Orders, cart items, and payment methods.
//!
//! An [`Order`] is the audit trail for the engine's stock and credit effects:
//! it holds snapshots (customer display name, item data), never live
//! references, so later edits or deletions cannot rewrite history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use khales_core::ProductId;

use super::product::Product;

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Paid in cash.
    Cash,
    /// Paid by card.
    Card,
    /// Put on the customer's store-credit ledger.
    Credit,
}

impl PaymentMethod {
    /// The Arabic display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cash => "نقداً",
            Self::Card => "بطاقة",
            Self::Credit => "دين",
        }
    }
}

/// Order fulfillment status.
///
/// The shop has no shipping workflow; sales complete as `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Being prepared.
    #[serde(rename = "قيد التنفيذ")]
    InProgress,
    /// Handed to a carrier.
    #[serde(rename = "تم الشحن")]
    Shipped,
    /// In the customer's hands.
    #[serde(rename = "تم التوصيل")]
    Delivered,
}

/// A product snapshot plus sale-specific selections.
///
/// Exists only in the active sale workflow and inside a completed order's
/// item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line was taken from.
    pub product_id: ProductId,
    /// Product name at sale time.
    pub name: String,
    /// Unit price at sale time.
    pub price: Decimal,
    /// Chosen size.
    pub selected_size: String,
    /// Chosen color name.
    pub selected_color: String,
    /// Units sold. Always positive.
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a product into a cart line.
    #[must_use]
    pub fn from_product(
        product: &Product,
        selected_size: impl Into<String>,
        selected_color: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            selected_size: selected_size.into(),
            selected_color: selected_color.into(),
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A completed sale record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Human-readable order number (e.g., "KH-483920-a4f1").
    pub order_number: String,
    /// Customer display name at sale time - a snapshot, not a reference,
    /// so it survives customer deletion and edits.
    pub customer_name: String,
    /// Total charged, net of any discount the caller applied.
    pub total: Decimal,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// When the sale completed.
    pub date: DateTime<Utc>,
    /// The items sold, verbatim from the cart.
    pub items: Vec<CartItem>,
}
