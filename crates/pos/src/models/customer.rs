//! Customer and store-credit ledger models.
//!
//! The credit ledger is append-only: `total_credit` is mutated exclusively
//! through [`Customer::apply_transaction`], which appends the transaction and
//! updates the balance in the same step. That single mutation path is what
//! keeps the invariant `total_credit == Σ transactions.amount` intact.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use khales_core::{CustomerId, TransactionId};

/// One ledger entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditTransaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// Signed amount: positive = new debt, negative = payment received.
    pub amount: Decimal,
    /// Day the entry was recorded.
    pub date: NaiveDate,
    /// Free-text note.
    pub note: String,
}

/// Intent of a manual ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntryKind {
    /// The customer took on new debt.
    Debt,
    /// The customer paid some of the balance back.
    Payment,
}

impl LedgerEntryKind {
    /// Convert an entered magnitude into the signed ledger amount.
    ///
    /// Payments negate the magnitude; debts keep it positive.
    #[must_use]
    pub fn signed_amount(self, magnitude: Decimal) -> Decimal {
        match self {
            Self::Debt => magnitude,
            Self::Payment => -magnitude,
        }
    }
}

/// Loyalty tier shown on the membership card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyTier {
    /// Regular customer.
    #[serde(rename = "فضية")]
    Silver,
    /// Preferred customer.
    #[serde(rename = "ذهبية")]
    Gold,
    /// Reserved top tier.
    #[serde(rename = "ماسية")]
    Diamond,
}

impl LoyaltyTier {
    /// The Arabic display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Silver => "فضية",
            Self::Gold => "ذهبية",
            Self::Diamond => "ماسية",
        }
    }
}

/// Snapshot of a customer's loyalty standing, used for the membership card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyProfile {
    /// Accumulated points.
    pub points: u32,
    /// Loyalty tier.
    pub tier: LoyaltyTier,
    /// Printed card number.
    pub card_number: String,
    /// Value encoded into the card's QR code.
    pub qr_value: String,
    /// Customer display name.
    pub customer_name: String,
    /// Join date, if known.
    pub member_since: Option<NaiveDate>,
}

/// A person with a running store-credit relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Current balance: positive = owes the store. Can go negative if the
    /// customer overpaid.
    pub total_credit: Decimal,
    /// Ledger entries, newest first. Append-only.
    pub transactions: Vec<CreditTransaction>,
    /// Day the customer joined.
    pub joined_date: NaiveDate,
    /// Preferred customers get a 10% discount and the gold tier.
    pub is_preferred: bool,
}

impl Customer {
    /// Create a customer with an empty ledger.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, joined_date: NaiveDate) -> Self {
        Self {
            id: CustomerId::generate(),
            name: name.into(),
            phone: phone.into(),
            total_credit: Decimal::ZERO,
            transactions: Vec::new(),
            joined_date,
            is_preferred: false,
        }
    }

    /// Discount rate this customer is entitled to at sale time.
    #[must_use]
    pub fn discount_rate(&self) -> Decimal {
        if self.is_preferred {
            Decimal::new(10, 2) // 0.10
        } else {
            Decimal::ZERO
        }
    }

    /// Loyalty tier derived from the preferred flag.
    #[must_use]
    pub const fn tier(&self) -> LoyaltyTier {
        if self.is_preferred {
            LoyaltyTier::Gold
        } else {
            LoyaltyTier::Silver
        }
    }

    /// Append a ledger entry and update the balance together.
    ///
    /// This is the only mutation path for `total_credit`; the new entry is
    /// prepended so the ledger stays newest-first.
    pub fn apply_transaction(&mut self, amount: Decimal, note: impl Into<String>, date: NaiveDate) {
        self.transactions.insert(
            0,
            CreditTransaction {
                id: TransactionId::generate(),
                amount,
                date,
                note: note.into(),
            },
        );
        self.total_credit += amount;
    }

    /// Whether the balance reconciles with the ledger. Used by tests and
    /// debug assertions; always true if mutations go through
    /// [`Self::apply_transaction`].
    #[must_use]
    pub fn credit_is_consistent(&self) -> bool {
        let sum: Decimal = self.transactions.iter().map(|t| t.amount).sum();
        sum == self.total_credit
    }

    /// Loyalty snapshot for the membership card.
    #[must_use]
    pub fn loyalty_profile(&self) -> LoyaltyProfile {
        LoyaltyProfile {
            points: 0,
            tier: self.tier(),
            card_number: format!("KH-{}", self.id),
            qr_value: self.id.to_string(),
            customer_name: self.name.clone(),
            member_since: Some(self.joined_date),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn test_customer() -> Customer {
        Customer::new(
            "أمينة",
            "0550123456",
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_customer_has_zero_balance() {
        let customer = test_customer();
        assert_eq!(customer.total_credit, Decimal::ZERO);
        assert!(customer.transactions.is_empty());
        assert!(customer.credit_is_consistent());
    }

    #[test]
    fn test_apply_transaction_updates_both_together() {
        let mut customer = test_customer();
        let today = customer.joined_date;

        customer.apply_transaction(dec!(1800), "دين شراء", today);
        customer.apply_transaction(dec!(-500), "دفعة", today);

        assert_eq!(customer.total_credit, dec!(1300));
        assert_eq!(customer.transactions.len(), 2);
        assert!(customer.credit_is_consistent());
    }

    #[test]
    fn test_transactions_stay_newest_first() {
        let mut customer = test_customer();
        let today = customer.joined_date;

        customer.apply_transaction(dec!(100), "first", today);
        customer.apply_transaction(dec!(200), "second", today);

        assert_eq!(customer.transactions.first().unwrap().note, "second");
    }

    #[test]
    fn test_balance_can_go_negative_on_overpayment() {
        let mut customer = test_customer();
        customer.apply_transaction(dec!(-300), "دفعة زائدة", customer.joined_date);
        assert_eq!(customer.total_credit, dec!(-300));
        assert!(customer.credit_is_consistent());
    }

    #[test]
    fn test_ledger_entry_kind_signs() {
        assert_eq!(LedgerEntryKind::Debt.signed_amount(dec!(500)), dec!(500));
        assert_eq!(LedgerEntryKind::Payment.signed_amount(dec!(500)), dec!(-500));
    }

    #[test]
    fn test_preferred_discount_and_tier() {
        let mut customer = test_customer();
        assert_eq!(customer.discount_rate(), Decimal::ZERO);
        assert_eq!(customer.tier(), LoyaltyTier::Silver);

        customer.is_preferred = true;
        assert_eq!(customer.discount_rate(), dec!(0.10));
        assert_eq!(customer.tier(), LoyaltyTier::Gold);
    }

    #[test]
    fn test_loyalty_profile_snapshot() {
        let customer = test_customer();
        let profile = customer.loyalty_profile();
        assert_eq!(profile.customer_name, customer.name);
        assert_eq!(profile.member_since, Some(customer.joined_date));
        assert_eq!(profile.tier, LoyaltyTier::Silver);
    }
}
