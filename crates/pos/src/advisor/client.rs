//! Gemini API client for the three advisory request shapes.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::instrument;

use crate::config::AdvisorConfig;
use crate::models::{ColorOption, Product};

use super::error::{AdvisorError, ApiErrorResponse};
use super::types::{
    Content, GenerateRequest, GenerateResponse, GenerationConfig, InventoryLine, Part,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
///
/// Stateless request/response; cheap to clone.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &AdvisorConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Ask a free-text styling question; answers in the shop's voice.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API errors, or the model
    /// produced no text.
    #[instrument(skip(self, question), fields(model = %self.inner.model))]
    pub async fn fashion_advice(&self, question: &str) -> Result<String, AdvisorError> {
        let prompt = format!(
            "بصفتك مستشار موضة خبير لمتجر \"خالص\" للملابس النسائية، أجب على هذا الاستفسار باللغة العربية بأسلوب راقٍ وجذاب: {question}"
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: Some(0.9),
                ..GenerationConfig::default()
            }),
        };

        self.generate(request).await
    }

    /// Extract up to three dominant colors from a clothing image.
    ///
    /// The response is constrained to a strict JSON schema of
    /// `{name, hex}` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not match
    /// the schema.
    #[instrument(skip(self, image), fields(model = %self.inner.model, bytes = image.len()))]
    pub async fn analyze_image_colors(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Vec<ColorOption>, AdvisorError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline(BASE64.encode(image), mime_type),
                    Part::text(
                        "قم بتحليل هذه القطعة من الملابس واستخرج الألوان الرئيسية السائدة فيها. \
                         أعد النتيجة كقائمة JSON تحتوي على كائنات بها 'name' (اسم اللون بالعربية الجذابة) \
                         و 'hex' (كود اللون الست عشري). استخرج 3 ألوان كحد أقصى.",
                    ),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(color_list_schema()),
                ..GenerationConfig::default()
            }),
        };

        let text = self.generate(request).await?;
        serde_json::from_str(&text)
            .map_err(|e| AdvisorError::Parse(format!("color list did not match schema: {e}")))
    }

    /// Generate a profit-insight summary for the current inventory.
    ///
    /// Sends a name/cost/price/stock snapshot per product, never the full
    /// product records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API errors, or the model
    /// produced no text.
    #[instrument(skip(self, products), fields(model = %self.inner.model, products = products.len()))]
    pub async fn profit_analysis(&self, products: &[Product]) -> Result<String, AdvisorError> {
        let snapshot: Vec<InventoryLine> = products.iter().map(InventoryLine::from).collect();
        let snapshot_json = serde_json::to_string(&snapshot)
            .map_err(|e| AdvisorError::Parse(format!("failed to serialize snapshot: {e}")))?;

        let prompt = format!(
            "بصفتك خبيراً مالياً، حلل بيانات الجرد هذه لمتجر ملابس نسائية: {snapshot_json}. \
             أعطني ملخصاً في 3 نقاط: \
             1. إجمالي الأرباح المتوقعة عند بيع كل المخزون. \
             2. متوسط هامش الربح المئوي. \
             3. نصيحة تجارية ذكية بناءً على هذه البيانات لتحسين المبيعات. \
             اجعل الرد باللغة العربية وبلهجة احترافية مشجعة."
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        };

        self.generate(request).await
    }

    /// Send a request and extract the first candidate's text.
    async fn generate(&self, request: GenerateRequest) -> Result<String, AdvisorError> {
        let url = format!(
            "{GEMINI_API_BASE}/{}:generateContent",
            self.inner.model
        );

        let response = self.inner.client.post(url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| AdvisorError::Parse(format!("failed to parse response: {e}")))?;

        parsed.first_text().ok_or(AdvisorError::EmptyResponse)
    }
}

/// Map an error status code to an [`AdvisorError`].
async fn handle_error_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> AdvisorError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return AdvisorError::RateLimited;
    }

    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                AdvisorError::Api {
                    status: api_error.error.status,
                    message: api_error.error.message,
                }
            } else {
                AdvisorError::Api {
                    status: status.to_string(),
                    message: body,
                }
            }
        }
        Err(e) => AdvisorError::Http(e),
    }
}

/// Strict response schema for the color-extraction call: an array of
/// `{name, hex}` objects.
fn color_list_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": {"type": "STRING"},
                "hex": {"type": "STRING"}
            },
            "required": ["name", "hex"]
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn test_client() -> GeminiClient {
        GeminiClient::new(&AdvisorConfig {
            api_key: SecretString::from("test-key"),
            model: "gemini-2.0-flash".to_string(),
        })
    }

    #[test]
    fn test_color_list_schema_shape() {
        let schema = color_list_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["required"][0], "name");
        assert_eq!(schema["items"]["required"][1], "hex");
    }

    #[test]
    fn test_color_entries_parse_from_schema_response() {
        let body = r##"[{"name": "أسود فاخر", "hex": "#000000"}, {"name": "ذهبي", "hex": "#c9a063"}]"##;
        let colors: Vec<ColorOption> = serde_json::from_str(body).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].hex, "#000000");
    }

    #[test]
    fn test_gemini_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GeminiClient>();
    }

    #[test]
    fn test_gemini_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiClient>();
        let _ = test_client();
    }
}
