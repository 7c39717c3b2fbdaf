//! # Sweet Commands
//!
//! Commands for the catalog: list, add, delete, search, sort, buy, restock.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI                      Command                    Store               │
//! │  ──                      ───────                    ─────               │
//! │  AddSweetRequest ──────► validate fields ─────────► add(Sweet)          │
//! │  SearchRequest ────────► find_by_* (intersected) ─► Vec<Sweet>          │
//! │  (id, quantity) ───────► purchase / restock ──────► &Sweet              │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                         SweetDto (+ stockLevel, available)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sweets_core::validation::{
    validate_category, validate_initial_quantity, validate_price, validate_search_text,
    validate_sweet_id, validate_sweet_name,
};
use sweets_core::{Price, StockLevel, Sweet, SweetId, ValidationError, ValidationResult};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{InventoryState, ShopConfig};

// =============================================================================
// DTOs
// =============================================================================

/// Sweet DTO (Data Transfer Object) for the UI.
///
/// Adds the display-only fields a card needs on top of the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweetDto {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: u32,
    pub quantity: i64,
    pub stock_level: StockLevel,
    /// Whether the Buy action should be enabled.
    pub available: bool,
}

impl SweetDto {
    pub fn from_sweet(sweet: &Sweet, low_stock_threshold: i64) -> Self {
        SweetDto {
            id: sweet.id.get(),
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.units(),
            quantity: sweet.quantity,
            stock_level: sweet.stock_level(low_stock_threshold),
            available: sweet.is_available(),
        }
    }
}

fn to_dtos(sweets: &[Sweet], config: &ShopConfig) -> Vec<SweetDto> {
    sweets
        .iter()
        .map(|s| SweetDto::from_sweet(s, config.low_stock_threshold))
        .collect()
}

/// Raw add-form input. Every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSweetRequest {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl AddSweetRequest {
    /// Validates every field and builds the record.
    pub fn into_sweet(self) -> ValidationResult<Sweet> {
        let id = validate_sweet_id(required("id", self.id)?)?;
        let name = validate_sweet_name(&self.name)?;
        let category = validate_category(&self.category)?;
        let price = validate_price(required("price", self.price)?)?;
        let quantity = validate_initial_quantity(required("quantity", self.quantity)?)?;

        Ok(Sweet {
            id,
            name,
            category,
            price,
            quantity,
        })
    }
}

fn required(field: &str, value: Option<i64>) -> ValidationResult<i64> {
    value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

/// Combined search criteria. Each present field narrows the result; an
/// empty request returns the whole catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
}

/// Price ordering for [`sort_sweets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Catalog totals for headers and the startup log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub store_name: String,
    pub item_count: usize,
    /// Sum of stock counts; `None` if it overflows.
    pub total_units: Option<i64>,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Sum of price × quantity; `None` if it overflows.
    pub stock_value: Option<i64>,
}

// =============================================================================
// Queries
// =============================================================================

/// Lists every sweet in catalog order.
pub fn list_sweets(inventory: &InventoryState, config: &ShopConfig) -> Vec<SweetDto> {
    debug!("list_sweets command");
    inventory.with_store(|store| to_dtos(&store.list_all(), config))
}

/// Gets one sweet by id.
pub fn get_sweet(
    inventory: &InventoryState,
    config: &ShopConfig,
    id: u32,
) -> Result<SweetDto, ApiError> {
    debug!(id, "get_sweet command");
    let id = SweetId::new(id);
    inventory.with_store(|store| {
        store
            .get(id)
            .map(|s| SweetDto::from_sweet(s, config.low_stock_threshold))
            .ok_or_else(|| sweets_core::InventoryError::NotFound { id }.into())
    })
}

/// Searches by any combination of name text, category and price bounds.
///
/// ## Semantics
/// - `name`: case-insensitive substring
/// - `category`: case-insensitive exact match
/// - `minPrice` / `maxPrice`: inclusive; a missing bound is open
///
/// Results keep catalog order.
pub fn search_sweets(
    inventory: &InventoryState,
    config: &ShopConfig,
    request: SearchRequest,
) -> Result<Vec<SweetDto>, ApiError> {
    let name = request
        .name
        .as_deref()
        .map(validate_search_text)
        .transpose()?;

    debug!(?name, category = ?request.category, min = ?request.min_price, max = ?request.max_price, "search_sweets command");

    let results = inventory.with_store(|store| {
        let mut results = match &name {
            Some(text) => store.find_by_name(text),
            None => store.list_all(),
        };

        if let Some(category) = &request.category {
            let ids = id_set(&store.find_by_category(category));
            results.retain(|s| ids.contains(&s.id));
        }

        if request.min_price.is_some() || request.max_price.is_some() {
            let min = Price::from_units(request.min_price.unwrap_or(0));
            let max = Price::from_units(request.max_price.unwrap_or(u32::MAX));
            let ids = id_set(&store.find_by_price_range(min, max));
            results.retain(|s| ids.contains(&s.id));
        }

        results
    });

    Ok(to_dtos(&results, config))
}

fn id_set(sweets: &[Sweet]) -> HashSet<SweetId> {
    sweets.iter().map(|s| s.id).collect()
}

/// Returns the catalog sorted by price. Ties keep catalog order.
pub fn sort_sweets(
    inventory: &InventoryState,
    config: &ShopConfig,
    order: SortOrder,
) -> Vec<SweetDto> {
    debug!(?order, "sort_sweets command");
    let sorted = inventory.with_store(|store| match order {
        SortOrder::Ascending => store.sort_by_price_ascending(),
        SortOrder::Descending => store.sort_by_price_descending(),
    });
    to_dtos(&sorted, config)
}

/// Summarizes the catalog.
pub fn catalog_summary(inventory: &InventoryState, config: &ShopConfig) -> CatalogSummary {
    inventory.with_store(|store| {
        let mut summary = CatalogSummary {
            store_name: config.store_name.clone(),
            item_count: store.len(),
            total_units: Some(0),
            low_stock: 0,
            out_of_stock: 0,
            stock_value: Some(0),
        };

        for sweet in store.iter() {
            summary.total_units = summary
                .total_units
                .and_then(|total| total.checked_add(sweet.quantity.max(0)));
            match sweet.stock_level(config.low_stock_threshold) {
                StockLevel::LowStock => summary.low_stock += 1,
                StockLevel::OutOfStock => summary.out_of_stock += 1,
                StockLevel::InStock => {}
            }
            summary.stock_value = summary
                .stock_value
                .zip(sweet.price.total_for(sweet.quantity.max(0)))
                .and_then(|(total, value)| total.checked_add(value));
        }

        summary
    })
}

// =============================================================================
// Mutations
// =============================================================================

/// Adds a sweet from add-form input.
pub fn add_sweet(
    inventory: &InventoryState,
    config: &ShopConfig,
    request: AddSweetRequest,
) -> Result<SweetDto, ApiError> {
    let sweet = request.into_sweet()?;
    let dto = SweetDto::from_sweet(&sweet, config.low_stock_threshold);

    inventory.with_store_mut(|store| store.add(sweet))?;

    info!(id = dto.id, name = %dto.name, "Sweet added");
    Ok(dto)
}

/// Deletes a sweet and returns what was removed.
pub fn delete_sweet(
    inventory: &InventoryState,
    config: &ShopConfig,
    id: u32,
) -> Result<SweetDto, ApiError> {
    let removed = inventory.with_store_mut(|store| store.remove_by_id(SweetId::new(id)))?;

    info!(id, name = %removed.name, "Sweet deleted");
    Ok(SweetDto::from_sweet(&removed, config.low_stock_threshold))
}

/// Buys `quantity` units and returns the updated sweet.
pub fn purchase_sweet(
    inventory: &InventoryState,
    config: &ShopConfig,
    id: u32,
    quantity: i64,
) -> Result<SweetDto, ApiError> {
    debug!(id, quantity, "purchase_sweet command");
    let dto = inventory.with_store_mut(|store| {
        store
            .purchase(SweetId::new(id), quantity)
            .map(|s| SweetDto::from_sweet(s, config.low_stock_threshold))
    })?;

    info!(id, quantity, remaining = dto.quantity, "Sweet purchased");
    Ok(dto)
}

/// Restocks `quantity` units and returns the updated sweet.
pub fn restock_sweet(
    inventory: &InventoryState,
    config: &ShopConfig,
    id: u32,
    quantity: i64,
) -> Result<SweetDto, ApiError> {
    debug!(id, quantity, "restock_sweet command");
    let dto = inventory.with_store_mut(|store| {
        store
            .restock(SweetId::new(id), quantity)
            .map(|s| SweetDto::from_sweet(s, config.low_stock_threshold))
    })?;

    info!(id, quantity, stock = dto.quantity, "Sweet restocked");
    Ok(dto)
}

// =============================================================================
// Unit Tests
// =============================================================================
