//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Presence checks on new transactions and budgets
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A persisted value could not be parsed into its domain type
    #[error("Persisted data under '{key}' is corrupt: {reason}")]
    PersistedDataCorrupt { key: String, reason: String },

    /// The key-value store rejected a read or write
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinanceError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a corrupt-data error for a store key
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::PersistedDataCorrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if persisted data failed to parse
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::PersistedDataCorrupt { .. })
    }

    /// Check if the backing store was unavailable
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;
