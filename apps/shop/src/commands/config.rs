//! # Config Commands
//!
//! Command for retrieving shop configuration.

use tracing::debug;

use crate::state::ShopConfig;

/// Gets the current shop configuration.
///
/// ## When Used
/// - Startup (store name in the header)
/// - Rendering stock badges (low-stock threshold)
pub fn get_config(config: &ShopConfig) -> ShopConfig {
    debug!("get_config command");
    config.clone()
}
