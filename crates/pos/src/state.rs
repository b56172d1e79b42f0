//! Application state container.
//!
//! [`AppState`] is the composition root's handle on everything: it owns the
//! in-memory [`Shop`], the [`JsonStore`] mirror, and the optional advisory
//! client. Every mutating intent goes through a method here that first runs
//! the engine, then persists exactly the collections the operation touched -
//! persistence is an explicit save-on-change step, not an ambient hook.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use khales_core::{CustomerId, NotificationId, ProductId};

use crate::advisor::{
    analyze_image_colors_or_fallback, fashion_advice_or_fallback, profit_analysis_or_fallback,
    GeminiClient,
};
use crate::config::PosConfig;
use crate::engine::{SaleReceipt, Shop};
use crate::error::Result;
use crate::models::{CartItem, ColorOption, Customer, LedgerEntryKind, PaymentMethod, Product};
use crate::store::{keys, JsonStore, Theme};

/// The application's state: shop data, persistence, and the advisor.
pub struct AppState {
    shop: Shop,
    store: JsonStore,
    advisor: Option<GeminiClient>,
    theme: Theme,
}

impl AppState {
    /// Open the store under the configured data directory and load all
    /// collections (missing or corrupt files fall back to empty defaults).
    ///
    /// # Errors
    ///
    /// Returns an error only if the data directory cannot be created.
    pub fn load(config: &PosConfig) -> Result<Self> {
        let store = JsonStore::open(&config.data_dir)?;

        let shop = Shop {
            products: store.load(keys::PRODUCTS),
            customers: store.load(keys::CUSTOMERS),
            orders: store.load(keys::ORDERS),
            notifications: store.load(keys::NOTIFICATIONS),
            favorites: store.load(keys::FAVORITES),
        };
        let theme = store.load(keys::THEME);

        let advisor = config.advisor.as_ref().map(GeminiClient::new);
        if advisor.is_none() {
            info!("advisor not configured, AI calls will answer with fallbacks");
        }

        Ok(Self {
            shop,
            store,
            advisor,
            theme,
        })
    }

    /// Read-only view of the shop.
    #[must_use]
    pub const fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Current UI theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    // =========================================================================
    // Mutating operations: engine first, then persist what changed
    // =========================================================================

    /// Complete a sale and persist every aggregate the transaction touched.
    ///
    /// # Errors
    ///
    /// Engine validation errors (empty cart, zero-quantity line) or a
    /// persistence failure.
    pub fn complete_sale(
        &mut self,
        cart: &[CartItem],
        customer_id: Option<CustomerId>,
        payment_method: PaymentMethod,
        total: Decimal,
        now: DateTime<Utc>,
    ) -> Result<SaleReceipt> {
        let receipt = self
            .shop
            .complete_sale(cart, customer_id, payment_method, total, now)?;

        self.store.save(keys::PRODUCTS, &self.shop.products)?;
        self.store.save(keys::CUSTOMERS, &self.shop.customers)?;
        self.store.save(keys::ORDERS, &self.shop.orders)?;
        self.store.save(keys::NOTIFICATIONS, &self.shop.notifications)?;
        Ok(receipt)
    }

    /// Add a product and persist the collection.
    ///
    /// # Errors
    ///
    /// Persistence failure.
    pub fn add_product(&mut self, product: Product) -> Result<ProductId> {
        let id = self.shop.add_product(product);
        self.store.save(keys::PRODUCTS, &self.shop.products)?;
        Ok(id)
    }

    /// Update a product in place and persist the collection.
    ///
    /// # Errors
    ///
    /// Unknown product ID or persistence failure.
    pub fn update_product(&mut self, id: ProductId, updated: Product) -> Result<()> {
        self.shop.update_product(id, updated)?;
        self.store.save(keys::PRODUCTS, &self.shop.products)?;
        Ok(())
    }

    /// Delete a product (post-confirmation) and persist what changed.
    ///
    /// # Errors
    ///
    /// Unknown product ID or persistence failure.
    pub fn delete_product(&mut self, id: ProductId, now: DateTime<Utc>) -> Result<()> {
        self.shop.delete_product(id, now)?;
        self.store.save(keys::PRODUCTS, &self.shop.products)?;
        self.store.save(keys::FAVORITES, &self.shop.favorites)?;
        self.store.save(keys::NOTIFICATIONS, &self.shop.notifications)?;
        Ok(())
    }

    /// Add a customer and persist the collection.
    ///
    /// # Errors
    ///
    /// Persistence failure.
    pub fn add_customer(&mut self, customer: Customer) -> Result<CustomerId> {
        let id = self.shop.add_customer(customer);
        self.store.save(keys::CUSTOMERS, &self.shop.customers)?;
        Ok(id)
    }

    /// Delete a customer and persist the collection.
    ///
    /// # Errors
    ///
    /// Unknown customer ID or persistence failure.
    pub fn delete_customer(&mut self, id: CustomerId) -> Result<()> {
        self.shop.delete_customer(id)?;
        self.store.save(keys::CUSTOMERS, &self.shop.customers)?;
        Ok(())
    }

    /// Record a manual ledger entry; returns the new balance.
    ///
    /// # Errors
    ///
    /// Unknown customer, non-positive magnitude, or persistence failure.
    pub fn record_ledger_entry(
        &mut self,
        customer_id: CustomerId,
        kind: LedgerEntryKind,
        magnitude: Decimal,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Decimal> {
        let balance = self
            .shop
            .record_ledger_entry(customer_id, kind, magnitude, note, now)?;
        self.store.save(keys::CUSTOMERS, &self.shop.customers)?;
        Ok(balance)
    }

    /// Toggle a favorite and persist the list. Returns whether the product
    /// is now a favorite.
    ///
    /// # Errors
    ///
    /// Persistence failure.
    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<bool> {
        let now_favorite = self.shop.toggle_favorite(id);
        self.store.save(keys::FAVORITES, &self.shop.favorites)?;
        Ok(now_favorite)
    }

    /// Mark one notification read and persist. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Persistence failure.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> Result<bool> {
        let found = self.shop.mark_notification_read(id);
        if found {
            self.store.save(keys::NOTIFICATIONS, &self.shop.notifications)?;
        }
        Ok(found)
    }

    /// Mark all notifications read and persist.
    ///
    /// # Errors
    ///
    /// Persistence failure.
    pub fn mark_all_notifications_read(&mut self) -> Result<()> {
        self.shop.mark_all_notifications_read();
        self.store.save(keys::NOTIFICATIONS, &self.shop.notifications)?;
        Ok(())
    }

    /// Switch the UI theme and persist the flag.
    ///
    /// # Errors
    ///
    /// Persistence failure.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.save(keys::THEME, &theme)?;
        Ok(())
    }

    // =========================================================================
    // Advisory calls: always answer, never fail
    // =========================================================================

    /// Ask the styling advisor; degrades to a fallback message.
    pub async fn fashion_advice(&self, question: &str) -> String {
        fashion_advice_or_fallback(self.advisor.as_ref(), question).await
    }

    /// Extract dominant colors from an image; degrades to an empty list.
    pub async fn analyze_image_colors(&self, image: &[u8], mime_type: &str) -> Vec<ColorOption> {
        analyze_image_colors_or_fallback(self.advisor.as_ref(), image, mime_type).await
    }

    /// Profit-insight summary for the current inventory; degrades to a
    /// fallback message.
    pub async fn profit_analysis(&self) -> String {
        profit_analysis_or_fallback(self.advisor.as_ref(), &self.shop.products).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    use crate::models::{Category, ProductDraft};

    use super::*;

    fn scratch_state() -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let config = PosConfig {
            data_dir: dir.path().to_path_buf(),
            advisor: None,
        };
        let state = AppState::load(&config).unwrap();
        (dir, state)
    }

    fn sample_product() -> Product {
        ProductDraft::new()
            .name("طقم صيفي")
            .purchase_price(dec!(2000))
            .price(dec!(3500))
            .category(Category::Sets)
            .stock(3)
            .build()
            .unwrap()
    }

    #[test]
    fn test_fresh_state_is_empty() {
        let (_dir, state) = scratch_state();
        assert!(state.shop().products.is_empty());
        assert!(state.shop().orders.is_empty());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let dir = TempDir::new().unwrap();
        let config = PosConfig {
            data_dir: dir.path().to_path_buf(),
            advisor: None,
        };

        let product_id = {
            let mut state = AppState::load(&config).unwrap();
            let id = state.add_product(sample_product()).unwrap();
            let cart = vec![CartItem::from_product(
                state.shop().product(id).unwrap(),
                "M",
                "أبيض",
                1,
            )];
            state
                .complete_sale(&cart, None, PaymentMethod::Cash, dec!(3500), Utc::now())
                .unwrap();
            id
        };

        let reloaded = AppState::load(&config).unwrap();
        assert_eq!(reloaded.shop().product(product_id).unwrap().stock, 2);
        assert_eq!(reloaded.shop().orders.len(), 1);
        assert_eq!(reloaded.shop().notifications.len(), 1);
    }

    #[test]
    fn test_theme_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = PosConfig {
            data_dir: dir.path().to_path_buf(),
            advisor: None,
        };

        {
            let mut state = AppState::load(&config).unwrap();
            state.set_theme(Theme::Dark).unwrap();
        }

        let reloaded = AppState::load(&config).unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_favorites_persist_and_cascade() {
        let (_dir, mut state) = scratch_state();
        let id = state.add_product(sample_product()).unwrap();
        assert!(state.toggle_favorite(id).unwrap());

        state.delete_product(id, Utc::now()).unwrap();
        assert!(state.shop().favorites.is_empty());
    }
}
