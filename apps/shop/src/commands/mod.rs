//! # Commands Module
//!
//! Every operation the shop front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── sweet.rs    ◄─── Catalog, search, sort, purchase, restock
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end                                                              │
//! │  ─────────                                                              │
//! │  purchase_sweet(&inventory, &config, 1001, 2)                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command                                                                │
//! │  ───────                                                                │
//! │  fn purchase_sweet(                                                     │
//! │      inventory: &InventoryState,  ◄── Shared store                      │
//! │      config: &ShopConfig,         ◄── Thresholds for the DTO            │
//! │      id: u32, quantity: i64,      ◄── Call params                       │
//! │  ) -> Result<SweetDto, ApiError>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Front end receives: SweetDto or { code, message }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod config;
pub mod sweet;
