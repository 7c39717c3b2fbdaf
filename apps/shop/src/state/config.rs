//! # Shop Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SWEETS_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use sweets_core::DEFAULT_LOW_STOCK_THRESHOLD;
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Shop name shown in headers and the startup summary.
    pub store_name: String,

    /// Seed the sample catalog into a fresh store on startup.
    pub load_sample_data: bool,

    /// Stock at or below this is reported as low.
    pub low_stock_threshold: i64,
}

impl Default for ShopConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Sweet Shop"
    /// - Sample data: loaded
    /// - Low stock: 10 units or fewer
    fn default() -> Self {
        ShopConfig {
            store_name: "Sweet Shop".to_string(),
            load_sample_data: true,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ShopConfig {
    /// Creates a new ShopConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SWEETS_STORE_NAME`: Override store name
    /// - `SWEETS_LOAD_SAMPLE_DATA`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    /// - `SWEETS_LOW_STOCK_THRESHOLD`: Non-negative integer
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparseable values keep their
    /// default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(store_name) = lookup("SWEETS_STORE_NAME") {
            let store_name = store_name.trim();
            if !store_name.is_empty() {
                config.store_name = store_name.to_string();
            }
        }

        if let Some(raw) = lookup("SWEETS_LOAD_SAMPLE_DATA") {
            match parse_bool(&raw) {
                Some(value) => config.load_sample_data = value,
                None => warn!(value = %raw, "Ignoring invalid SWEETS_LOAD_SAMPLE_DATA"),
            }
        }

        if let Some(raw) = lookup("SWEETS_LOW_STOCK_THRESHOLD") {
            match raw.trim().parse::<i64>() {
                Ok(value) if value >= 0 => config.low_stock_threshold = value,
                _ => warn!(value = %raw, "Ignoring invalid SWEETS_LOW_STOCK_THRESHOLD"),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
