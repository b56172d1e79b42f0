//! Product domain models: categories, color options, and the product builder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use khales_core::ProductId;

/// Image reference substituted when a draft is built without any images.
///
/// Default substitution is an explicit policy here, not an incidental
/// fallback: a product always renders with at least one image slot.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.svg";

/// Product category.
///
/// Serialized with the shop's Arabic labels so persisted data matches what
/// the staff see. "All" is a filter, not a category - see [`CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Dresses.
    #[serde(rename = "فساتين")]
    Dresses,
    /// Abayas.
    #[serde(rename = "عبايات")]
    Abayas,
    /// Coordinated sets.
    #[serde(rename = "أطقم")]
    Sets,
    /// Accessories.
    #[serde(rename = "إكسسوارات")]
    Accessories,
}

impl Category {
    /// All real categories, in display order.
    pub const ALL: [Self; 4] = [Self::Dresses, Self::Abayas, Self::Sets, Self::Accessories];

    /// The Arabic display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dresses => "فساتين",
            Self::Abayas => "عبايات",
            Self::Sets => "أطقم",
            Self::Accessories => "إكسسوارات",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category filter for listings.
///
/// `All` is a pseudo-category that only exists at the filter level; a real
/// product always carries a concrete [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every product.
    #[default]
    All,
    /// Match products of one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product of the given category passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

/// A named color with its hex code (e.g., "أسود" / "#000000").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Display name of the color.
    pub name: String,
    /// Hex color code.
    pub hex: String,
}

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// What the shop paid per unit.
    pub purchase_price: Decimal,
    /// Sale price per unit.
    pub price: Decimal,
    /// Discount percentage (0-100) applied at display time.
    pub discount_percentage: Decimal,
    /// Product category.
    pub category: Category,
    /// Image references, never empty (placeholder policy).
    pub images: Vec<String>,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Available colors.
    pub colors: Vec<ColorOption>,
    /// Units in stock. Decremented only by completed sales; cannot go
    /// negative by construction.
    pub stock: u32,
}

impl Product {
    /// Per-unit profit if sold at the listed price.
    #[must_use]
    pub fn unit_margin(&self) -> Decimal {
        self.price - self.purchase_price
    }
}

/// Validation failures when building a [`Product`] from a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// A required field was not provided.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A monetary amount was negative.
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),

    /// Discount percentage outside 0-100.
    #[error("discount percentage must be between 0 and 100")]
    InvalidDiscount,
}

/// Builder for [`Product`] that validates required fields before
/// constructing the immutable value.
///
/// Required: name, purchase price, sale price, category. Everything else
/// has a documented default (empty description, zero discount, placeholder
/// image, no sizes/colors, zero stock).
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    name: Option<String>,
    description: Option<String>,
    purchase_price: Option<Decimal>,
    price: Option<Decimal>,
    discount_percentage: Option<Decimal>,
    category: Option<Category>,
    images: Vec<String>,
    sizes: Vec<String>,
    colors: Vec<ColorOption>,
    stock: Option<u32>,
}

impl ProductDraft {
    /// Start an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the purchase (cost) price.
    #[must_use]
    pub const fn purchase_price(mut self, amount: Decimal) -> Self {
        self.purchase_price = Some(amount);
        self
    }

    /// Set the sale price.
    #[must_use]
    pub const fn price(mut self, amount: Decimal) -> Self {
        self.price = Some(amount);
        self
    }

    /// Set the discount percentage.
    #[must_use]
    pub const fn discount_percentage(mut self, pct: Decimal) -> Self {
        self.discount_percentage = Some(pct);
        self
    }

    /// Set the category.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Add an image reference.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Add an available size.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.sizes.push(size.into());
        self
    }

    /// Add an available color.
    #[must_use]
    pub fn color(mut self, color: ColorOption) -> Self {
        self.colors.push(color);
        self
    }

    /// Set the initial stock count.
    #[must_use]
    pub const fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Build the product, rejecting incomplete or invalid drafts.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when a required field is missing, a price is
    /// negative, or the discount is outside 0-100.
    pub fn build(self) -> Result<Product, DraftError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(DraftError::MissingField("name"))?;
        let purchase_price = self
            .purchase_price
            .ok_or(DraftError::MissingField("purchase_price"))?;
        let price = self.price.ok_or(DraftError::MissingField("price"))?;
        let category = self.category.ok_or(DraftError::MissingField("category"))?;

        if purchase_price < Decimal::ZERO {
            return Err(DraftError::NegativeAmount("purchase_price"));
        }
        if price < Decimal::ZERO {
            return Err(DraftError::NegativeAmount("price"));
        }

        let discount_percentage = self.discount_percentage.unwrap_or(Decimal::ZERO);
        if discount_percentage < Decimal::ZERO || discount_percentage > Decimal::from(100) {
            return Err(DraftError::InvalidDiscount);
        }

        let images = if self.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            self.images
        };

        Ok(Product {
            id: ProductId::generate(),
            name,
            description: self.description.unwrap_or_default(),
            purchase_price,
            price,
            discount_percentage,
            category,
            images,
            sizes: self.sizes,
            colors: self.colors,
            stock: self.stock.unwrap_or(0),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn minimal_draft() -> ProductDraft {
        ProductDraft::new()
            .name("فستان سهرة")
            .purchase_price(dec!(4000))
            .price(dec!(6500))
            .category(Category::Dresses)
    }

    #[test]
    fn test_build_minimal_draft() {
        let product = minimal_draft().build().unwrap();
        assert_eq!(product.name, "فستان سهرة");
        assert_eq!(product.stock, 0);
        assert_eq!(product.discount_percentage, Decimal::ZERO);
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn test_build_rejects_missing_name() {
        let err = ProductDraft::new()
            .purchase_price(dec!(100))
            .price(dec!(200))
            .category(Category::Accessories)
            .build()
            .unwrap_err();
        assert_eq!(err, DraftError::MissingField("name"));
    }

    #[test]
    fn test_build_rejects_blank_name() {
        let err = minimal_draft().name("   ").build().unwrap_err();
        assert_eq!(err, DraftError::MissingField("name"));
    }

    #[test]
    fn test_build_rejects_negative_price() {
        let err = minimal_draft().price(dec!(-1)).build().unwrap_err();
        assert_eq!(err, DraftError::NegativeAmount("price"));
    }

    #[test]
    fn test_build_rejects_out_of_range_discount() {
        let err = minimal_draft()
            .discount_percentage(dec!(120))
            .build()
            .unwrap_err();
        assert_eq!(err, DraftError::InvalidDiscount);
    }

    #[test]
    fn test_explicit_images_skip_placeholder() {
        let product = minimal_draft().image("dress-1.jpg").build().unwrap();
        assert_eq!(product.images, vec!["dress-1.jpg".to_string()]);
    }

    #[test]
    fn test_category_filter_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_category_filter_only() {
        let filter = CategoryFilter::Only(Category::Abayas);
        assert!(filter.matches(Category::Abayas));
        assert!(!filter.matches(Category::Dresses));
    }

    #[test]
    fn test_category_serializes_to_arabic_label() {
        let json = serde_json::to_string(&Category::Dresses).unwrap();
        assert_eq!(json, "\"فساتين\"");
    }

    #[test]
    fn test_unit_margin() {
        let product = minimal_draft().build().unwrap();
        assert_eq!(product.unit_margin(), dec!(2500));
    }
}
