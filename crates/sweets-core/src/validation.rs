//! # Validation Module
//!
//! Input validation for the add-sweet form and search box.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI form                                                      │
//! │  └── "All fields are required"                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shop command (sweets-shop)                                   │
//! │  └── THIS MODULE: field rules on raw input                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: InventoryStore                                               │
//! │  ├── Unique id                                                         │
//! │  └── Stock rules (purchase / restock)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never calls these functions, so its own rules stay limited to
//! identity and stock.
//!
//! ## Usage
//! ```rust
//! use sweets_core::validation::{validate_price, validate_sweet_name};
//!
//! assert!(validate_sweet_name("Kaju Katli").is_ok());
//! assert!(validate_price(-1).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::price::Price;
use crate::types::SweetId;

/// Longest accepted sweet name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted category label, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Longest accepted search text, in characters.
pub const MAX_SEARCH_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a sweet name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_sweet_name(name: &str) -> ValidationResult<String> {
    required_text("name", name, MAX_NAME_LEN)
}

/// Validates a category label and returns it trimmed.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    required_text("category", category, MAX_CATEGORY_LEN)
}

/// Validates search text.
///
/// ## Rules
/// - Can be empty (matches every sweet)
/// - At most [`MAX_SEARCH_LEN`] characters
///
/// The text is returned unchanged: surrounding spaces are part of the
/// substring being searched for.
pub fn validate_search_text(text: &str) -> ValidationResult<String> {
    if text.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(text.to_string())
}

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a raw id from a form.
///
/// ## Rules
/// - Must be positive (an empty numeric form field arrives as 0)
/// - Must fit in a [`SweetId`]
pub fn validate_sweet_id(raw: i64) -> ValidationResult<SweetId> {
    if raw <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    u32::try_from(raw)
        .map(SweetId::new)
        .map_err(|_| ValidationError::OutOfRange {
            field: "id".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        })
}

/// Validates a raw price.
///
/// ## Rules
/// - Must be non-negative (zero is a free item)
/// - Must fit in a [`Price`]
///
/// ## Example
/// ```rust
/// use sweets_core::validation::validate_price;
///
/// assert_eq!(validate_price(50).unwrap().units(), 50);
/// assert!(validate_price(0).is_ok());
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(raw: i64) -> ValidationResult<Price> {
    u32::try_from(raw)
        .map(Price::from_units)
        .map_err(|_| ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::from(u32::MAX),
        })
}

/// Validates the opening stock of a new sweet.
///
/// ## Rules
/// - Must be non-negative (a new sweet may start out of stock)
pub fn validate_initial_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
