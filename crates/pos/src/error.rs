//! Unified error type for the application library.
//!
//! Layer errors fold into [`PosError`] via `#[from]`; callers that only care
//! about "did it work" can hold this one type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::models::DraftError;
use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum PosError {
    /// Persistence failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The engine rejected the operation.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// A product draft failed validation.
    #[error("invalid product: {0}")]
    Draft(#[from] DraftError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for [`PosError`].
pub type Result<T> = std::result::Result<T, PosError>;
