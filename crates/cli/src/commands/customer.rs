//! The `customer` command family: add, list, and manual ledger entries.

use chrono::Utc;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use khales_core::{display_amount, CustomerId};
use khales_pos::models::{Customer, LedgerEntryKind};
use khales_pos::AppState;

/// Actions under `khales customer`.
#[derive(Debug, Subcommand)]
pub enum CustomerAction {
    /// Add a new customer
    Add(AddArgs),
    /// List customers with their balances
    List,
    /// Show one customer's ledger
    Show {
        /// Customer to show
        id: CustomerId,
    },
    /// Record a manual ledger entry (debt or payment)
    Credit(CreditArgs),
    /// Delete a customer (past orders keep their name snapshots)
    Delete {
        /// Customer to delete
        id: CustomerId,
    },
}

/// Arguments for `khales customer add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Mark as a preferred (gold) customer
    #[arg(long)]
    pub preferred: bool,
}

/// Arguments for `khales customer credit`.
#[derive(Debug, Args)]
pub struct CreditArgs {
    /// Customer to record the entry against
    pub id: CustomerId,

    /// Entry magnitude (always entered positive)
    #[arg(long)]
    pub amount: Decimal,

    /// Record a payment received (negates the amount)
    #[arg(long, conflicts_with = "debt")]
    pub payment: bool,

    /// Record new debt (the default)
    #[arg(long)]
    pub debt: bool,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

/// Dispatch a customer action.
pub fn dispatch(
    state: &mut AppState,
    action: CustomerAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CustomerAction::Add(args) => {
            let mut customer = Customer::new(&args.name, &args.phone, Utc::now().date_naive());
            customer.is_preferred = args.preferred;
            let id = state.add_customer(customer)?;
            println!("تمت إضافة الزبونة: {id}");
        }
        CustomerAction::List => {
            for customer in &state.shop().customers {
                println!(
                    "{}  {}  {}  الرصيد: {}",
                    customer.id,
                    customer.name,
                    customer.tier().label(),
                    display_amount(customer.total_credit),
                );
            }
        }
        CustomerAction::Show { id } => show(state, id)?,
        CustomerAction::Credit(args) => credit(state, &args)?,
        CustomerAction::Delete { id } => {
            state.delete_customer(id)?;
            println!("تم حذف الزبونة");
        }
    }
    Ok(())
}

fn show(state: &AppState, id: CustomerId) -> Result<(), Box<dyn std::error::Error>> {
    let customer = state
        .shop()
        .customer(id)
        .ok_or_else(|| format!("الزبونة غير موجودة: {id}"))?;

    println!("{}  ({})", customer.name, customer.phone);
    println!("الرصيد الحالي: {}", display_amount(customer.total_credit));
    for transaction in &customer.transactions {
        println!(
            "  {}  {}  {}",
            transaction.date,
            display_amount(transaction.amount),
            transaction.note,
        );
    }
    Ok(())
}

fn credit(state: &mut AppState, args: &CreditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let kind = if args.payment {
        LedgerEntryKind::Payment
    } else {
        LedgerEntryKind::Debt
    };
    let balance =
        state.record_ledger_entry(args.id, kind, args.amount, args.note.clone(), Utc::now())?;
    println!("الرصيد الجديد: {}", display_amount(balance));
    Ok(())
}
