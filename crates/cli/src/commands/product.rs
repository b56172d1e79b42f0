//! The `product` command family: add, list, delete, plus favorites.

use std::io::{self, BufRead, Write as _};

use chrono::Utc;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use khales_core::{display_amount, ProductId};
use khales_pos::models::{CategoryFilter, ColorOption, ProductDraft};
use khales_pos::AppState;

/// Actions under `khales product`.
#[derive(Debug, Subcommand)]
pub enum ProductAction {
    /// Add a new product
    Add(AddArgs),
    /// List products
    List {
        /// Restrict to one category
        #[arg(long, value_enum)]
        category: Option<super::CategoryArg>,
    },
    /// Delete a product (asks for confirmation)
    Delete {
        /// Product to delete
        id: ProductId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Arguments for `khales product add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Purchase (cost) price
    #[arg(long)]
    pub cost: Decimal,

    /// Sale price
    #[arg(long)]
    pub price: Decimal,

    /// Category
    #[arg(long, value_enum)]
    pub category: super::CategoryArg,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Discount percentage (0-100)
    #[arg(long)]
    pub discount: Option<Decimal>,

    /// Initial stock count
    #[arg(long, default_value_t = 0)]
    pub stock: u32,

    /// Image reference (repeatable)
    #[arg(long = "image")]
    pub images: Vec<String>,

    /// Available size (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Available color as `name:hex` (repeatable)
    #[arg(long = "color")]
    pub colors: Vec<String>,
}

/// Arguments for `khales favorite`.
#[derive(Debug, Args)]
pub struct FavoriteArgs {
    /// Product to toggle
    pub id: ProductId,
}

/// Dispatch a product action.
pub fn dispatch(
    state: &mut AppState,
    action: ProductAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProductAction::Add(args) => add(state, &args),
        ProductAction::List { category } => {
            list(state, category.map_or(CategoryFilter::All, |c| CategoryFilter::Only(c.into())));
            Ok(())
        }
        ProductAction::Delete { id, yes } => delete(state, id, yes),
    }
}

fn add(state: &mut AppState, args: &AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut draft = ProductDraft::new()
        .name(&args.name)
        .purchase_price(args.cost)
        .price(args.price)
        .category(args.category.into())
        .stock(args.stock);

    if let Some(description) = &args.description {
        draft = draft.description(description);
    }
    if let Some(discount) = args.discount {
        draft = draft.discount_percentage(discount);
    }
    for image in &args.images {
        draft = draft.image(image);
    }
    for size in &args.sizes {
        draft = draft.size(size);
    }
    for color in &args.colors {
        let (name, hex) = color
            .split_once(':')
            .ok_or_else(|| format!("لون غير صالح (المطلوب: اسم:كود): {color}"))?;
        draft = draft.color(ColorOption {
            name: name.to_string(),
            hex: hex.to_string(),
        });
    }

    let id = state.add_product(draft.build()?)?;
    println!("تمت إضافة المنتج: {id}");
    Ok(())
}

fn list(state: &AppState, filter: CategoryFilter) {
    for product in &state.shop().products {
        if !filter.matches(product.category) {
            continue;
        }
        println!(
            "{}  {}  {}  ({})  المخزون: {}",
            product.id,
            product.name,
            display_amount(product.price),
            product.category,
            product.stock,
        );
    }
}

fn delete(
    state: &mut AppState,
    id: ProductId,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !yes && !confirm("⚠️ هل أنتِ متأكدة من حذف هذه القطعة نهائياً؟ سيتم إزالتها من المخزن والمفضلات.")? {
        println!("تم الإلغاء");
        return Ok(());
    }
    state.delete_product(id, Utc::now())?;
    println!("تم حذف المنتج");
    Ok(())
}

/// Toggle a product's favorite status.
pub fn favorite(
    state: &mut AppState,
    args: &FavoriteArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if state.toggle_favorite(args.id)? {
        println!("أضيف إلى المفضلات");
    } else {
        println!("أزيل من المفضلات");
    }
    Ok(())
}

/// Prompt the user for a yes/no confirmation on stdin.
fn confirm(message: &str) -> Result<bool, io::Error> {
    print!("{message} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
