//! # Domain Types
//!
//! Core domain types for the sweet shop inventory.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Sweet       │   │    SweetId      │   │   StockLevel    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  u32, assigned  │   │  InStock        │       │
//! │  │  name           │   │  by the caller  │   │  LowStock       │       │
//! │  │  category       │   └─────────────────┘   │  OutOfStock     │       │
//! │  │  price (Price)  │                         └─────────────────┘       │
//! │  │  quantity       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! The id is chosen by whoever creates the record (the add form, the sample
//! catalog). Nothing in this crate generates ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::price::Price;

// =============================================================================
// Sweet Id
// =============================================================================

/// Caller-assigned identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SweetId(u32);

impl SweetId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        SweetId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SweetId {
    #[inline]
    fn from(id: u32) -> Self {
        SweetId(id)
    }
}

// =============================================================================
// Sweet
// =============================================================================

/// A catalog entry held by the inventory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sweet {
    /// Unique key within a store.
    pub id: SweetId,

    /// Display name. Case is preserved; searches ignore it.
    pub name: String,

    /// Category label, e.g. "Milk-Based". Compared case-insensitively.
    pub category: String,

    /// Unit price.
    pub price: Price,

    /// Units in stock. Only `purchase` and `restock` change this inside a store.
    pub quantity: i64,
}

impl Sweet {
    /// Builds a sweet from raw values.
    ///
    /// ```rust
    /// use sweets_core::Sweet;
    ///
    /// let sweet = Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20);
    /// assert_eq!(sweet.id.get(), 1001);
    /// assert_eq!(sweet.price.units(), 50);
    /// ```
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u32,
        quantity: i64,
    ) -> Self {
        Sweet {
            id: SweetId::new(id),
            name: name.into(),
            category: category.into(),
            price: Price::from_units(price),
            quantity,
        }
    }

    /// Whether at least one unit can be bought.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Classifies the current stock against a low-stock threshold.
    ///
    /// ```rust
    /// use sweets_core::{StockLevel, Sweet};
    ///
    /// let sweet = Sweet::new(1002, "Gajar Halwa", "Vegetable-Based", 30, 7);
    /// assert_eq!(sweet.stock_level(10), StockLevel::LowStock);
    /// assert_eq!(sweet.stock_level(5), StockLevel::InStock);
    /// ```
    pub fn stock_level(&self, low_threshold: i64) -> StockLevel {
        if self.quantity <= 0 {
            StockLevel::OutOfStock
        } else if self.quantity <= low_threshold {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }
}

// =============================================================================
// Stock Level
// =============================================================================

/// Coarse stock indicator for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// More than the low-stock threshold.
    InStock,
    /// Between one unit and the threshold, inclusive.
    LowStock,
    /// Nothing left to sell.
    OutOfStock,
}

// =============================================================================
// Unit Tests
// =============================================================================
