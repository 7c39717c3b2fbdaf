//! # Error Types
//!
//! Domain-specific error types for sweets-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sweets-core errors (this file)                                        │
//! │  ├── InventoryError   - Store operation failures                       │
//! │  └── ValidationError  - Add-form input failures                        │
//! │                                                                         │
//! │  sweets-shop errors (separate crate)                                   │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: InventoryError / ValidationError → ApiError → UI                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `InventoryError` is a caller-correctable condition. A failed store
//! operation leaves the collection exactly as it was.

use std::fmt;

use thiserror::Error;

use crate::types::SweetId;

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors returned by [`InventoryStore`](crate::store::InventoryStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// `add` was called with an id that is already in the store.
    #[error("Item with ID {id} already exists")]
    DuplicateId { id: SweetId },

    /// No item with this id is in the store.
    ///
    /// ## When This Occurs
    /// - `remove_by_id` on an unknown id
    /// - `purchase` / `restock` on an unknown id
    #[error("Item with ID {id} not found")]
    NotFound { id: SweetId },

    /// A purchase asked for more units than are in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Buy (qty: 25)
    ///      │
    ///      ▼
    /// Check stock: available=20
    ///      │
    ///      ▼
    /// InsufficientStock { id: 1001, available: 20, requested: 25 }
    ///      │
    ///      ▼
    /// UI shows: "Not enough stock to complete the purchase"
    /// ```
    #[error("Not enough stock to complete the purchase")]
    InsufficientStock {
        id: SweetId,
        available: i64,
        requested: i64,
    },

    /// A purchase or restock quantity was zero or negative.
    #[error("{operation} quantity must be a positive number")]
    InvalidQuantity {
        operation: StockOperation,
        requested: i64,
    },

    /// A restock would push stock past the largest representable count.
    #[error("Restock of {requested} would exceed the maximum stock level")]
    StockOverflow {
        id: SweetId,
        stock: i64,
        requested: i64,
    },
}

/// The stock-changing operation an [`InventoryError::InvalidQuantity`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOperation {
    Purchase,
    Restock,
}

impl fmt::Display for StockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockOperation::Purchase => f.write_str("Purchase"),
            StockOperation::Restock => f.write_str("Restock"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when add-form input doesn't meet requirements, before a
/// [`Sweet`](crate::types::Sweet) is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for store results.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
