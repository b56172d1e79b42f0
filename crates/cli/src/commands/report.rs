//! The `report` command: derived sales and inventory aggregates.

use chrono::Utc;

use khales_core::display_amount;
use khales_pos::reports;
use khales_pos::AppState;

/// Stock level at or below which a product is flagged.
const LOW_STOCK_THRESHOLD: u32 = 2;

/// Print the report: total and monthly sales, expected profit, category
/// breakdown, and low-stock items. All values are recomputed from the
/// current collections.
pub fn show(state: &AppState) {
    let shop = state.shop();
    let now = Utc::now();

    println!("إجمالي المبيعات: {}", display_amount(reports::total_sales(&shop.orders)));
    println!(
        "مبيعات هذا الشهر: {}",
        display_amount(reports::monthly_sales(&shop.orders, now))
    );
    println!(
        "الأرباح المتوقعة من المخزون: {}",
        display_amount(reports::expected_profit(&shop.products))
    );

    println!("\nالتوزيع حسب الفئة:");
    for (category, count) in reports::category_counts(&shop.products) {
        println!("  {category}: {count}");
    }

    let low = reports::low_stock(&shop.products, LOW_STOCK_THRESHOLD);
    if !low.is_empty() {
        println!("\nمخزون منخفض:");
        for product in low {
            println!("  {}  (المتبقي: {})", product.name, product.stock);
        }
    }
}
