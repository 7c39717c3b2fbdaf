//! # API Error Type
//!
//! Unified error type for shop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Sweet Shop                         │
//! │                                                                         │
//! │  purchase_sweet(1001, 25)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function   Result<T, ApiError>                          │  │
//! │  │         │                                                        │  │
//! │  │  Form input bad? ──── ValidationError ─────┐                     │  │
//! │  │         │                                  │                     │  │
//! │  │  Store rejects?  ──── InventoryError ──────┴──► ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  UI receives:                                                           │
//! │    { "code": "INSUFFICIENT_STOCK",                                      │
//! │      "message": "Not enough stock to complete the purchase" }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store messages pass through unchanged so the UI can show them as-is.

use serde::Serialize;
use sweets_core::{InventoryError, ValidationError};
use thiserror::Error;
use tracing::warn;

/// API error returned from shop commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No sweet with the given id
    NotFound,

    /// A sweet with the given id already exists
    DuplicateId,

    /// Purchase exceeds stock
    InsufficientStock,

    /// Purchase or restock quantity not positive, or restock overflows stock
    InvalidQuantity,

    /// Add-form or search input failed validation
    ValidationError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to API errors.
impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        let code = match err {
            InventoryError::DuplicateId { .. } => ErrorCode::DuplicateId,
            InventoryError::NotFound { .. } => ErrorCode::NotFound,
            InventoryError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            InventoryError::InvalidQuantity { .. } | InventoryError::StockOverflow { .. } => {
                ErrorCode::InvalidQuantity
            }
        };

        warn!(?code, error = ?err, "Inventory operation rejected");
        ApiError::new(code, err.to_string())
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        warn!(error = %err, "Input validation failed");
        ApiError::validation(err.to_string())
    }
}
