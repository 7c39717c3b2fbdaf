//! # State Module
//!
//! Application state for the sweet shop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────┐   ┌──────────────────────┐        │
//! │          │   InventoryState         │   │   ShopConfig         │        │
//! │          │                          │   │                      │        │
//! │          │  Arc<Mutex<              │   │  store_name          │        │
//! │          │    InventoryStore        │   │  load_sample_data    │        │
//! │          │  >>                      │   │  low_stock_threshold │        │
//! │          └──────────────────────────┘   └──────────────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • InventoryState: one Mutex around every store operation              │
//! │  • ShopConfig: read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod inventory;

pub use config::ShopConfig;
pub use inventory::InventoryState;
