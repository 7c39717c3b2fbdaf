//! # Price Module
//!
//! Provides the `Price` type for catalog prices.
//!
//! ## Why Integer Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Range queries compare prices with <= and >=:                           │
//! │    0.1 + 0.2 <= 0.3  →  false  ❌                                       │
//! │                                                                         │
//! │  OUR SOLUTION: Whole units of an abstract currency                      │
//! │    Comparisons and stable sorts are exact and total (Ord)               │
//! │    Negative prices cannot be constructed at all (u32)                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Formatting a price for a locale or currency is the UI's job. `Display`
//! prints the bare number.
//!
//! ## Usage
//! ```rust
//! use sweets_core::price::Price;
//!
//! let kaju_katli = Price::from_units(50);
//! let jalebi = Price::from_units(15);
//!
//! assert!(jalebi < kaju_katli);
//! assert_eq!(kaju_katli.to_string(), "50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative price in whole units of an abstract currency.
///
/// ## Design Decisions
/// - **u32 (unsigned)**: "non-negative" holds by construction
/// - **Ord**: price range filters and stable sorts compare directly
/// - **Newtype serde**: serializes as a plain JSON number
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Price(u32);

impl Price {
    /// Creates a price from whole currency units.
    #[inline]
    pub const fn from_units(units: u32) -> Self {
        Price(units)
    }

    /// Returns the price in whole currency units.
    #[inline]
    pub const fn units(&self) -> u32 {
        self.0
    }

    /// The zero price (free items are allowed).
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the price is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Value of `quantity` units at this price, or `None` on overflow or
    /// negative quantity.
    ///
    /// ```rust
    /// use sweets_core::price::Price;
    ///
    /// assert_eq!(Price::from_units(12).total_for(30), Some(360));
    /// assert_eq!(Price::from_units(12).total_for(-1), None);
    /// ```
    pub fn total_for(&self, quantity: i64) -> Option<i64> {
        if quantity < 0 {
            return None;
        }
        i64::from(self.0).checked_mul(quantity)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Price {
    #[inline]
    fn from(units: u32) -> Self {
        Price(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
