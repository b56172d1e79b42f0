//! CLI command implementations, one module per command family.

pub mod customer;
pub mod export;
pub mod notify;
pub mod product;
pub mod report;
pub mod sale;

use clap::ValueEnum;

use khales_pos::models::{Category, PaymentMethod};
use khales_pos::store::Theme;

/// Payment method argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PaymentArg {
    /// Paid in cash.
    Cash,
    /// Paid by card.
    Card,
    /// Put on the customer's credit ledger.
    Credit,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Cash => Self::Cash,
            PaymentArg::Card => Self::Card,
            PaymentArg::Credit => Self::Credit,
        }
    }
}

/// Product category argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// فساتين
    Dresses,
    /// عبايات
    Abayas,
    /// أطقم
    Sets,
    /// إكسسوارات
    Accessories,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Dresses => Self::Dresses,
            CategoryArg::Abayas => Self::Abayas,
            CategoryArg::Sets => Self::Sets,
            CategoryArg::Accessories => Self::Accessories,
        }
    }
}

/// UI theme argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    /// Light mode.
    Light,
    /// Dark mode.
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}
