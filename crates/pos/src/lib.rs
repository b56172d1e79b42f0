//! Khales POS - point-of-sale and inventory library for a single boutique.
//!
//! The shop's four aggregates (products, customers, orders, notifications)
//! live in memory inside a [`engine::Shop`] and are mirrored to a local JSON
//! store on every mutation. The one piece of real business logic is the
//! sale-completion transaction in [`engine`]: stock decrement, credit-ledger
//! accrual, order creation, and notification emission as one conceptual unit.
//!
//! # Modules
//!
//! - [`models`] - Domain types (Product, Customer, Order, Notification, Cart)
//! - [`engine`] - The ledger/transaction engine operating on a [`engine::Shop`]
//! - [`reports`] - Derived read-only aggregates over orders and products
//! - [`store`] - JSON-file persistence adapter
//! - [`advisor`] - Gemini advisory client (styling, colors, profit insight)
//! - [`state`] - Application state container wiring engine + persistence
//! - [`export`] - Printable invoice / membership-card rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod advisor;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod state;
pub mod store;

pub use config::PosConfig;
pub use error::PosError;
pub use state::AppState;
