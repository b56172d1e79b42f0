//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `KHALES_DATA_DIR` - Directory for the JSON store (default: `./khales-data`)
//! - `GEMINI_API_KEY` - API key for the AI advisory service; the advisor is
//!   disabled (all calls answer with fallback messages) when absent
//! - `GEMINI_MODEL` - Advisory model name (default: `gemini-2.0-flash`)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Default advisory model.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default data directory when `KHALES_DATA_DIR` is unset.
const DEFAULT_DATA_DIR: &str = "./khales-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was present but unusable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Advisory (Gemini) service configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AdvisorConfig {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Model name used for all advisory calls.
    pub model: String,
}

impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Directory holding the JSON store.
    pub data_dir: PathBuf,
    /// Advisory service configuration; `None` disables the advisor.
    pub advisor: Option<AdvisorConfig>,
}

impl PosConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `GEMINI_API_KEY` is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("KHALES_DATA_DIR", DEFAULT_DATA_DIR));

        let advisor = match get_optional_env("GEMINI_API_KEY") {
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "GEMINI_API_KEY".to_string(),
                    "is set but blank".to_string(),
                ));
            }
            Some(key) => Some(AdvisorConfig {
                api_key: SecretString::from(key),
                model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            }),
            None => None,
        };

        Ok(Self { data_dir, advisor })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_config_debug_redacts_key() {
        let config = AdvisorConfig {
            api_key: SecretString::from("super-secret-key"),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-key"));
        assert!(debug_output.contains(DEFAULT_GEMINI_MODEL));
    }
}
