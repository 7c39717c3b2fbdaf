//! # sweets-core: Inventory Store for the Sweet Shop
//!
//! This crate is the **heart** of the sweet shop. It owns the catalog and
//! every rule about identity and stock, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sweet Shop Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI (cards, forms, tables)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sweets-shop                                  │   │
//! │  │    commands, shared state, config, ApiError, logging setup      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sweets-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │   types   │  │   price   │  │ validation│  │   │
//! │  │   │ Inventory │  │   Sweet   │  │   Price   │  │ form rules│  │   │
//! │  │   │   Store   │  │  SweetId  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ENV • NO GLOBAL STATE                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The Inventory Store (add, remove, search, sort, purchase, restock)
//! - [`types`] - Domain types (Sweet, SweetId, StockLevel)
//! - [`price`] - Integer price type
//! - [`error`] - Inventory and validation errors
//! - [`validation`] - Add-form input rules
//! - [`sample`] - Seed catalog
//!
//! ## Example Usage
//!
//! ```rust
//! use sweets_core::{InventoryStore, Sweet, SweetId};
//!
//! let mut store = InventoryStore::new();
//! store.add(Sweet::new(1003, "Gulab Jamun", "Milk-Based", 10, 50)).unwrap();
//!
//! let hits = store.find_by_name("gulab");
//! assert_eq!(hits[0].id, SweetId::new(1003));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod sample;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{
    InventoryError, InventoryResult, StockOperation, ValidationError, ValidationResult,
};
pub use price::Price;
pub use store::InventoryStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock at or below this many units counts as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
