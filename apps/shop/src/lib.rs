//! # Sweet Shop Library
//!
//! Application layer around the `sweets-core` inventory store: shared
//! state, configuration, commands and logging setup.
//!
//! ## Module Organization
//! ```text
//! sweets_shop/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── inventory.rs◄─── Lock-guarded shared store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── sweet.rs    ◄─── Catalog commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use sweets_core::sample::sample_catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::sweet::{catalog_summary, CatalogSummary};
use error::ApiError;
use state::{InventoryState, ShopConfig};

/// Starts the shop and returns the startup summary.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,sweets=debug, can be overridden with RUST_LOG       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • SWEETS_* environment variables over defaults                      │
/// │                                                                         │
/// │  3. Build Inventory ──────────────────────────────────────────────────► │
/// │     • Empty store, seeded with the sample catalog if enabled            │
/// │                                                                         │
/// │  4. Log Summary ──────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<CatalogSummary, ApiError> {
    init_tracing();

    let config = ShopConfig::from_env();
    info!(store = %config.store_name, "Starting sweet shop");

    let inventory = build_inventory(&config)?;
    let summary = catalog_summary(&inventory, &config);

    info!(
        items = summary.item_count,
        units = ?summary.total_units,
        low_stock = summary.low_stock,
        out_of_stock = summary.out_of_stock,
        "Inventory ready"
    );
    Ok(summary)
}

/// Builds the shared inventory for `config`.
pub fn build_inventory(config: &ShopConfig) -> Result<InventoryState, ApiError> {
    if !config.load_sample_data {
        info!("Starting with an empty inventory");
        return Ok(InventoryState::new());
    }

    Ok(InventoryState::seeded(sample_catalog())?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sweets=trace` - Show trace for sweets crates only
/// - Default: `info,sweets=debug`
///
/// A subscriber that is already installed is left in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sweets=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_inventory_seeds_sample_data() {
        let inventory = build_inventory(&ShopConfig::default()).unwrap();
        assert_eq!(inventory.with_store(|s| s.len()), 5);
    }

    #[test]
    fn test_build_inventory_empty_when_disabled() {
        let config = ShopConfig {
            load_sample_data: false,
            ..ShopConfig::default()
        };
        let inventory = build_inventory(&config).unwrap();
        assert!(inventory.with_store(|s| s.is_empty()));
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
