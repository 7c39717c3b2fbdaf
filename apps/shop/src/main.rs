//! # Sweet Shop Entry Point
//!
//! Starts the shop and prints the catalog summary as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `SWEETS_*` variables
//! 3. Build and seed the inventory
//! 4. Print the summary

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    let summary = sweets_shop::run()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
