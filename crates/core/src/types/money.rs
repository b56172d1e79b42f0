//! Money formatting for the shop's single currency.
//!
//! All monetary amounts in Khales are [`rust_decimal::Decimal`] values in
//! Algerian dinars. The shop operates in a single currency, so amounts carry
//! no currency code; this module holds the one display convention.

use rust_decimal::Decimal;

/// Currency suffix used across the shop (Algerian dinar).
pub const CURRENCY: &str = "DA";

/// Format an amount for display (e.g., "1500 DA").
///
/// Trailing fractional zeros are dropped so whole amounts print without
/// a decimal point.
#[must_use]
pub fn display_amount(amount: Decimal) -> String {
    format!("{} {CURRENCY}", amount.normalize())
}
