//! Domain models for the Khales shop.
//!
//! Products, customers, orders, and notifications are the four top-level
//! collections; cart items exist transiently during a sale and as snapshots
//! inside completed orders.

pub mod customer;
pub mod notification;
pub mod order;
pub mod product;

pub use customer::{
    CreditTransaction, Customer, LedgerEntryKind, LoyaltyProfile, LoyaltyTier,
};
pub use notification::{Notification, NOTIFICATION_RETENTION};
pub use order::{CartItem, Order, OrderStatus, PaymentMethod};
pub use product::{Category, CategoryFilter, ColorOption, DraftError, Product, ProductDraft};
