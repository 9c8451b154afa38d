//! Error types for the gate API.

use thiserror::Error;

use pagegate_core::ValidationError;
use pagegate_store::StoreError;

/// Errors surfaced by the gate API.
#[derive(Debug, Error)]
pub enum GateError {
    /// The settings payload could not be normalized.
    #[error("invalid settings payload: {0}")]
    Validation(#[from] ValidationError),

    /// The settings store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The page catalog failed.
    #[error("page catalog error: {0}")]
    Catalog(String),

    /// A settings write failed and the stored value does not match what
    /// was submitted.
    #[error("settings write failed and the stored value does not match")]
    SaveNotPersisted,
}

/// Result type for gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
