//! AI advisory service: styling advice, color extraction, profit insight.
//!
//! [`GeminiClient`] is the raw REST client and keeps honest `Result`
//! returns. The `*_or_fallback` functions are the service layer the rest of
//! the application calls: every failure - missing API key, transport error,
//! unparsable response - degrades to a fixed user-facing value, so no error
//! ever propagates past this module.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::AdvisorError;
pub use types::InventoryLine;

use tracing::warn;

use crate::models::ColorOption;
use crate::models::Product;

/// Shown when the advisory service errored or is not configured.
pub const ADVICE_UNAVAILABLE: &str = "نعتذر، حدث خطأ في التواصل مع المستشار الذكي.";

/// Shown when the service answered but produced no text.
pub const ADVICE_EMPTY: &str = "عذراً، لم أتمكن من معالجة طلبك حالياً.";

/// Shown when profit analysis errored or is not configured.
pub const PROFIT_UNAVAILABLE: &str = "تعذر إجراء التحليل المالي في الوقت الحالي.";

/// Shown when profit analysis answered but produced no text.
pub const PROFIT_EMPTY: &str = "لا توجد بيانات كافية للتحليل حالياً.";

/// Ask a free-text styling question, degrading to a fallback message.
pub async fn fashion_advice_or_fallback(client: Option<&GeminiClient>, question: &str) -> String {
    let Some(client) = client else {
        return ADVICE_UNAVAILABLE.to_string();
    };
    match client.fashion_advice(question).await {
        Ok(answer) => answer,
        Err(AdvisorError::EmptyResponse) => ADVICE_EMPTY.to_string(),
        Err(err) => {
            warn!(error = %err, "fashion advice request failed");
            ADVICE_UNAVAILABLE.to_string()
        }
    }
}

/// Extract dominant colors from an image, degrading to an empty list.
pub async fn analyze_image_colors_or_fallback(
    client: Option<&GeminiClient>,
    image: &[u8],
    mime_type: &str,
) -> Vec<ColorOption> {
    let Some(client) = client else {
        return Vec::new();
    };
    match client.analyze_image_colors(image, mime_type).await {
        Ok(colors) => colors,
        Err(err) => {
            warn!(error = %err, "color analysis request failed");
            Vec::new()
        }
    }
}

/// Generate a profit-insight summary, degrading to a fallback message.
pub async fn profit_analysis_or_fallback(
    client: Option<&GeminiClient>,
    products: &[Product],
) -> String {
    let Some(client) = client else {
        return PROFIT_UNAVAILABLE.to_string();
    };
    match client.profit_analysis(products).await {
        Ok(analysis) => analysis,
        Err(AdvisorError::EmptyResponse) => PROFIT_EMPTY.to_string(),
        Err(err) => {
            warn!(error = %err, "profit analysis request failed");
            PROFIT_UNAVAILABLE.to_string()
        }
    }
}
