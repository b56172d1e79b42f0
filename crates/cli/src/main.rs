//! Khales CLI - the shop's command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Add a product
//! khales product add --name "فستان سهرة" --cost 4000 --price 6500 --category dresses --stock 3
//!
//! # Complete a sale (two units of one product)
//! khales sell --item <product-id>:M:أسود:2 --payment cash
//!
//! # Put a sale on a customer's credit ledger
//! khales sell --item <product-id>:M:أسود:1 --customer <customer-id> --payment credit
//!
//! # Record a payment against a customer's balance
//! khales customer credit <customer-id> --amount 500 --payment
//!
//! # Reports and AI advisory
//! khales report
//! khales advise "ما الألوان الرائجة لخريف هذا العام؟"
//! ```
//!
//! All state lives in the JSON store under `KHALES_DATA_DIR`; every command
//! loads it, applies one user intent, and persists what changed.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use khales_pos::{AppState, PosConfig};

mod commands;

#[derive(Parser)]
#[command(name = "khales")]
#[command(author, version, about = "Khales boutique point-of-sale")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete a sale from cart lines
    Sell(commands::sale::SellArgs),
    /// Manage products
    Product {
        #[command(subcommand)]
        action: commands::product::ProductAction,
    },
    /// Manage customers and their credit ledgers
    Customer {
        #[command(subcommand)]
        action: commands::customer::CustomerAction,
    },
    /// Toggle a product's favorite status
    Favorite(commands::product::FavoriteArgs),
    /// Show sales and inventory reports
    Report,
    /// List notifications or mark them read
    Notifications(commands::notify::NotificationsArgs),
    /// Ask the AI styling advisor a question
    Advise {
        /// The question to ask
        question: String,
    },
    /// AI profit analysis of the current inventory
    AnalyzeProfit,
    /// Export a printable invoice for an order
    Invoice(commands::export::InvoiceArgs),
    /// Export a printable membership card for a customer
    Card(commands::export::CardArgs),
    /// Switch the UI theme
    Theme {
        /// Theme to switch to
        #[arg(value_enum)]
        theme: commands::ThemeArg,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = PosConfig::from_env()?;
    let mut state = AppState::load(&config)?;

    match cli.command {
        Commands::Sell(args) => commands::sale::sell(&mut state, &args)?,
        Commands::Product { action } => commands::product::dispatch(&mut state, action)?,
        Commands::Customer { action } => commands::customer::dispatch(&mut state, action)?,
        Commands::Favorite(args) => commands::product::favorite(&mut state, &args)?,
        Commands::Report => commands::report::show(&state),
        Commands::Notifications(args) => commands::notify::dispatch(&mut state, &args)?,
        Commands::Advise { question } => {
            let answer = state.fashion_advice(&question).await;
            println!("{answer}");
        }
        Commands::AnalyzeProfit => {
            let analysis = state.profit_analysis().await;
            println!("{analysis}");
        }
        Commands::Invoice(args) => commands::export::invoice(&state, &args)?,
        Commands::Card(args) => commands::export::card(&state, &args)?,
        Commands::Theme { theme } => {
            state.set_theme(theme.into())?;
            println!("تم تغيير المظهر");
        }
    }
    Ok(())
}
