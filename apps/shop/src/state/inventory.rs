//! # Inventory State
//!
//! Shares one [`InventoryStore`] between callers.
//!
//! ## Thread Safety
//! The store's `add`, `remove_by_id`, `purchase` and `restock` each check
//! and then act. Two callers interleaving those steps could both pass the
//! check, so every operation, reads included, runs under a single `Mutex`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action          Command              Store Call (under lock)        │
//! │  ─────────          ───────              ───────────────────────        │
//! │  Submit form ─────► add_sweet() ───────► store.add(sweet)               │
//! │  Click Buy ───────► purchase_sweet() ──► store.purchase(id, q)          │
//! │  Click Restock ───► restock_sweet() ───► store.restock(id, q)           │
//! │  Click Delete ────► delete_sweet() ────► store.remove_by_id(id)         │
//! │  Render table ────► list_sweets() ─────► store.list_all()               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sweets_core::{InventoryResult, InventoryStore, Sweet};
use tracing::info;

/// Shared, lock-guarded inventory.
///
/// Cloning is cheap and every clone sees the same store.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    store: Arc<Mutex<InventoryStore>>,
}

impl InventoryState {
    /// Creates state around an empty store.
    pub fn new() -> Self {
        InventoryState::default()
    }

    /// Creates state and bulk-loads `sweets` through repeated `add` calls.
    ///
    /// ## Errors
    /// The first duplicate id aborts seeding and is returned.
    pub fn seeded(sweets: impl IntoIterator<Item = Sweet>) -> InventoryResult<Self> {
        let mut store = InventoryStore::new();
        for sweet in sweets {
            store.add(sweet)?;
        }

        info!(count = store.len(), "Seeded inventory");
        Ok(InventoryState {
            store: Arc::new(Mutex::new(store)),
        })
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use sweets_shop::state::InventoryState;
    ///
    /// let state = InventoryState::new();
    /// assert_eq!(state.with_store(|s| s.len()), 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryStore) -> R,
    {
        f(&mut self.lock())
    }

    // Store operations validate before writing, so a panic in another
    // holder cannot have left the store half-updated.
    fn lock(&self) -> MutexGuard<'_, InventoryStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
