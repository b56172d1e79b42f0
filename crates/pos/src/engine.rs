//! The ledger/transaction engine.
//!
//! [`Shop`] owns the four top-level collections plus the favorites list and
//! exposes every state-mutating operation. The centerpiece is
//! [`Shop::complete_sale`], which turns a cart into a completed order:
//! stock reconciliation, customer resolution, credit accrual, order
//! creation, and notification emission - in that order, because later steps
//! read state produced by earlier ones.
//!
//! Everything is in-memory and single-session, so the steps are plain
//! sequential statements; the caller either gets a receipt or (for an empty
//! or invalid cart) nothing was mutated at all.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use khales_core::{display_amount, CustomerId, NotificationId, ProductId};

use crate::models::{
    CartItem, Customer, LedgerEntryKind, Notification, Order, OrderStatus, PaymentMethod, Product,
    NOTIFICATION_RETENTION,
};

/// Display name attributed to sales with no (resolvable) customer.
pub const CASH_CUSTOMER_NAME: &str = "زبون نقدي";

/// Prefix for human-readable order numbers.
const ORDER_NUMBER_PREFIX: &str = "KH";

/// Errors surfaced by the engine.
///
/// These are all caller-input problems caught before any mutation; stale
/// state (stock underflow, unresolvable customers) degrades gracefully
/// instead of erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A sale needs at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// Cart lines must sell at least one unit.
    #[error("cart line for {0} has zero quantity")]
    ZeroQuantity(String),

    /// Referenced product does not exist.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Referenced customer does not exist.
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Manual ledger entries need a positive magnitude.
    #[error("ledger entry amount must be positive")]
    NonPositiveAmount,
}

/// What the caller gets back from a completed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// The new order's number.
    pub order_number: String,
    /// Total charged.
    pub total: Decimal,
    /// Resolved customer display name (may be the cash-customer fallback).
    pub customer_name: String,
    /// How the sale was paid.
    pub payment_method: PaymentMethod,
}

/// The shop's entire mutable state: four top-level collections plus the
/// favorites list.
///
/// Orders, transactions, and notifications are kept newest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shop {
    /// Sellable items.
    pub products: Vec<Product>,
    /// Customers and their credit ledgers.
    pub customers: Vec<Customer>,
    /// Completed sales, newest first.
    pub orders: Vec<Order>,
    /// UI notifications, newest first, capped at [`NOTIFICATION_RETENTION`].
    pub notifications: Vec<Notification>,
    /// Products the user marked as favorites.
    pub favorites: Vec<ProductId>,
}

impl Shop {
    /// Create an empty shop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Sale completion
    // =========================================================================

    /// Complete a sale: the one multi-step transaction in the system.
    ///
    /// `total` is caller-supplied and already net of any preferred-customer
    /// discount. Steps, in required order:
    ///
    /// 1. Decrement stock for every cart line, floored at zero (displayed
    ///    stock may have been stale; the sale never fails for it).
    /// 2. Resolve the customer; missing or unknown IDs fall back to the
    ///    synthetic cash customer.
    /// 3. For credit payments on a resolved customer, append a ledger entry
    ///    and update the balance together.
    /// 4. Create the immutable order (status `Delivered`).
    /// 5. Prepend an unread notification summarizing the sale.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyCart`] or [`EngineError::ZeroQuantity`]
    /// before anything is mutated. No other failure exists: stale-state edge
    /// cases clamp or fall back instead of aborting.
    #[instrument(skip(self, cart), fields(lines = cart.len(), %total))]
    pub fn complete_sale(
        &mut self,
        cart: &[CartItem],
        customer_id: Option<CustomerId>,
        payment_method: PaymentMethod,
        total: Decimal,
        now: DateTime<Utc>,
    ) -> Result<SaleReceipt, EngineError> {
        if cart.is_empty() {
            return Err(EngineError::EmptyCart);
        }
        if let Some(line) = cart.iter().find(|item| item.quantity == 0) {
            return Err(EngineError::ZeroQuantity(line.name.clone()));
        }

        // Step 1: stock reconciliation. saturating_sub floors at zero, which
        // covers the stale-display race without failing the sale.
        for product in &mut self.products {
            let sold: u32 = cart
                .iter()
                .filter(|item| item.product_id == product.id)
                .map(|item| item.quantity)
                .sum();
            if sold > 0 {
                product.stock = product.stock.saturating_sub(sold);
            }
        }

        // Step 2: customer resolution. An unresolvable ID is a stale-state
        // case, not an error - the order still records a name snapshot.
        let resolved = match customer_id {
            Some(id) => {
                let found = self.customers.iter_mut().find(|c| c.id == id);
                if found.is_none() {
                    warn!(customer_id = %id, "sale referenced unknown customer, falling back to cash customer");
                }
                found
            }
            None => None,
        };

        let customer_name = resolved.as_ref().map_or_else(
            || CASH_CUSTOMER_NAME.to_string(),
            |customer| customer.name.clone(),
        );

        // Step 3: credit accrual, only for credit sales on a real customer.
        // Ledger append and balance update happen in one step.
        if payment_method == PaymentMethod::Credit {
            if let Some(customer) = resolved {
                let item_names: Vec<&str> = cart.iter().map(|item| item.name.as_str()).collect();
                let note = format!("دين شراء: {}", item_names.join("، "));
                customer.apply_transaction(total, note, now.date_naive());
            }
        }

        // Step 4: order creation. The order number is timestamp-derived but
        // carries a random suffix, so same-millisecond sales cannot collide.
        let order_number = generate_order_number(now);
        let order = Order {
            order_number: order_number.clone(),
            customer_name: customer_name.clone(),
            total,
            status: OrderStatus::Delivered,
            date: now,
            items: cart.to_vec(),
        };
        self.orders.insert(0, order);

        // Step 5: notification emission.
        self.push_notification(Notification::new(
            "عملية بيع ناجحة",
            format!(
                "تم بيع طلبيّة بقيمة {} للزبونة {customer_name}",
                display_amount(total)
            ),
            now,
        ));

        info!(%order_number, %customer_name, "sale completed");

        Ok(SaleReceipt {
            order_number,
            total,
            customer_name,
            payment_method,
        })
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Add a new product.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id;
        self.products.push(product);
        id
    }

    /// Replace a product's data in place, keeping its ID.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the ID is unknown.
    pub fn update_product(&mut self, id: ProductId, mut updated: Product) -> Result<(), EngineError> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EngineError::ProductNotFound(id))?;
        updated.id = id;
        *slot = updated;
        Ok(())
    }

    /// Delete a product and cascade the removal to the favorites list.
    ///
    /// Historical orders are untouched: they hold item snapshots, not live
    /// references. Emits a deletion notification. Confirmation is the
    /// caller's concern; the engine is invoked post-confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the ID is unknown.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: ProductId, now: DateTime<Utc>) -> Result<(), EngineError> {
        if !self.products.iter().any(|p| p.id == id) {
            return Err(EngineError::ProductNotFound(id));
        }
        self.products.retain(|p| p.id != id);
        self.favorites.retain(|fav| *fav != id);

        self.push_notification(Notification::new(
            "تم حذف منتج",
            "تمت إزالة قطعة من النظام بنجاح.",
            now,
        ));
        info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Toggle a product's favorite status. Returns whether it is now a
    /// favorite.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|fav| *fav == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    // =========================================================================
    // Customers & credit ledger
    // =========================================================================

    /// Add a new customer.
    pub fn add_customer(&mut self, customer: Customer) -> CustomerId {
        let id = customer.id;
        self.customers.push(customer);
        id
    }

    /// Delete a customer.
    ///
    /// Past orders keep their name snapshots and are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CustomerNotFound`] if the ID is unknown.
    pub fn delete_customer(&mut self, id: CustomerId) -> Result<(), EngineError> {
        if !self.customers.iter().any(|c| c.id == id) {
            return Err(EngineError::CustomerNotFound(id));
        }
        self.customers.retain(|c| c.id != id);
        Ok(())
    }

    /// Look up a customer by ID.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Record a manual ledger entry (admin-entered debt or payment).
    ///
    /// Payments negate the entered magnitude. The transaction append and
    /// balance update happen together - same invariant as sale credit
    /// accrual, reused by a different caller. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CustomerNotFound`] for an unknown customer and
    /// [`EngineError::NonPositiveAmount`] for a zero or negative magnitude;
    /// in both cases nothing is mutated.
    #[instrument(skip(self, note))]
    pub fn record_ledger_entry(
        &mut self,
        customer_id: CustomerId,
        kind: LedgerEntryKind,
        magnitude: Decimal,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Decimal, EngineError> {
        if magnitude <= Decimal::ZERO {
            return Err(EngineError::NonPositiveAmount);
        }
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or(EngineError::CustomerNotFound(customer_id))?;

        let amount = kind.signed_amount(magnitude);
        let note = note.unwrap_or_else(|| {
            match kind {
                LedgerEntryKind::Debt => "دين جديد",
                LedgerEntryKind::Payment => "دفعة مستلمة",
            }
            .to_string()
        });
        customer.apply_transaction(amount, note, now.date_naive());
        info!(%customer_id, %amount, "ledger entry recorded");
        Ok(customer.total_credit)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Mark one notification as read. Returns whether it was found.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification as read.
    pub fn mark_all_notifications_read(&mut self) {
        for n in &mut self.notifications {
            n.is_read = true;
        }
    }

    /// Prepend a notification, enforcing the retention cap.
    fn push_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        self.notifications.truncate(NOTIFICATION_RETENTION);
    }
}

/// Generate a human-readable, collision-resistant order number.
///
/// Keeps the timestamp-derived short form (last 6 digits of epoch millis)
/// and appends a random hex suffix so rapid sequential sales within the same
/// millisecond window cannot collide.
fn generate_order_number(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    let suffix: u16 = rand::random();
    format!("{ORDER_NUMBER_PREFIX}-{millis:06}-{suffix:04x}")
}
