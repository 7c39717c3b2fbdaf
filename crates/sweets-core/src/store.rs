//! # Inventory Store
//!
//! The single owner of every [`Sweet`] in the catalog.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InventoryStore                                       │
//! │                                                                         │
//! │  Mutations (Result)              Queries (never fail)                   │
//! │  ──────────────────              ─────────────────────                  │
//! │  add ─────────► push back        list_all            copy, in order     │
//! │  remove_by_id ► Vec::remove      find_by_name        substring, no case │
//! │  purchase ────► quantity -= q    find_by_category    equality, no case  │
//! │  restock ─────► quantity += q    find_by_price_range min..=max          │
//! │                                  sort_by_price_*     stable copies      │
//! │                                                                         │
//! │  Storage: Vec<Sweet> in insertion order. Every lookup is a linear scan. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Guarantee
//! Every mutation validates first and writes last, so an `Err` return means
//! the store is untouched.
//!
//! ## Example
//! ```rust
//! use sweets_core::{InventoryStore, Price, Sweet, SweetId};
//!
//! let mut store = InventoryStore::new();
//! store.add(Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20)).unwrap();
//!
//! let id = SweetId::new(1001);
//! assert_eq!(store.purchase(id, 5).unwrap().quantity, 15);
//! assert_eq!(store.restock(id, 10).unwrap().quantity, 25);
//!
//! let hits = store.find_by_price_range(Price::from_units(25), Price::from_units(55));
//! assert_eq!(hits.len(), 1);
//!
//! store.remove_by_id(id).unwrap();
//! assert!(store.list_all().is_empty());
//! ```

use tracing::debug;

use crate::error::{InventoryError, InventoryResult, StockOperation};
use crate::price::Price;
use crate::types::{Sweet, SweetId};

/// In-memory, insertion-ordered collection of sweets.
///
/// Construct one per application (or per test) and pass it where it is
/// needed. For shared use across threads, wrap it in a single lock.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    sweets: Vec<Sweet>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InventoryStore { sweets: Vec::new() }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a sweet to the end of the catalog.
    ///
    /// ## Errors
    /// [`InventoryError::DuplicateId`] if a sweet with the same id is present.
    pub fn add(&mut self, sweet: Sweet) -> InventoryResult<()> {
        if self.contains(sweet.id) {
            return Err(InventoryError::DuplicateId { id: sweet.id });
        }

        debug!(id = %sweet.id, name = %sweet.name, "Adding sweet");
        self.sweets.push(sweet);
        Ok(())
    }

    /// Removes the sweet with `id` and hands it back.
    ///
    /// The remaining sweets keep their relative order.
    ///
    /// ## Errors
    /// [`InventoryError::NotFound`] if no sweet has this id.
    pub fn remove_by_id(&mut self, id: SweetId) -> InventoryResult<Sweet> {
        let index = self.position(id)?;
        let removed = self.sweets.remove(index);

        debug!(id = %id, remaining = self.sweets.len(), "Removed sweet");
        Ok(removed)
    }

    /// Takes `quantity` units out of stock.
    ///
    /// ## Check Order
    /// ```text
    /// purchase(id, q)
    ///      │
    ///      ├── id unknown?       → NotFound
    ///      ├── q <= 0?           → InvalidQuantity (Purchase)
    ///      ├── q > stock?        → InsufficientStock
    ///      │
    ///      └── stock -= q, return updated sweet
    /// ```
    pub fn purchase(&mut self, id: SweetId, quantity: i64) -> InventoryResult<&Sweet> {
        let index = self.position(id)?;

        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity {
                operation: StockOperation::Purchase,
                requested: quantity,
            });
        }

        let sweet = &mut self.sweets[index];
        if sweet.quantity < quantity {
            return Err(InventoryError::InsufficientStock {
                id,
                available: sweet.quantity,
                requested: quantity,
            });
        }

        sweet.quantity -= quantity;
        debug!(id = %id, quantity, remaining = sweet.quantity, "Purchased sweet");
        Ok(&*sweet)
    }

    /// Adds `quantity` units to stock.
    ///
    /// The quantity is checked before the id is looked up, so a bad quantity
    /// on an unknown id reports `InvalidQuantity`, not `NotFound`.
    pub fn restock(&mut self, id: SweetId, quantity: i64) -> InventoryResult<&Sweet> {
        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity {
                operation: StockOperation::Restock,
                requested: quantity,
            });
        }

        let index = self.position(id)?;
        let sweet = &mut self.sweets[index];
        sweet.quantity =
            sweet
                .quantity
                .checked_add(quantity)
                .ok_or(InventoryError::StockOverflow {
                    id,
                    stock: sweet.quantity,
                    requested: quantity,
                })?;

        debug!(id = %id, quantity, stock = sweet.quantity, "Restocked sweet");
        Ok(&*sweet)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every sweet, in insertion order, as an owned copy.
    pub fn list_all(&self) -> Vec<Sweet> {
        self.sweets.clone()
    }

    /// Sweets whose name contains `text`, ignoring case.
    ///
    /// Empty text matches every sweet.
    pub fn find_by_name(&self, text: &str) -> Vec<Sweet> {
        let needle = text.to_lowercase();
        self.filtered(|s| s.name.to_lowercase().contains(&needle))
    }

    /// Sweets whose category equals `category`, ignoring case.
    ///
    /// This is an exact match: "Milk" does not find "Milk-Based".
    pub fn find_by_category(&self, category: &str) -> Vec<Sweet> {
        let wanted = category.to_lowercase();
        self.filtered(|s| s.category.to_lowercase() == wanted)
    }

    /// Sweets priced within `min..=max`.
    ///
    /// Reversed bounds are not an error. Nothing can match them, so the
    /// result is empty.
    pub fn find_by_price_range(&self, min: Price, max: Price) -> Vec<Sweet> {
        self.filtered(|s| (min..=max).contains(&s.price))
    }

    /// All sweets, cheapest first. Equal prices keep insertion order.
    pub fn sort_by_price_ascending(&self) -> Vec<Sweet> {
        let mut sorted = self.list_all();
        sorted.sort_by_key(|s| s.price);
        sorted
    }

    /// All sweets, dearest first. Equal prices keep insertion order.
    pub fn sort_by_price_descending(&self) -> Vec<Sweet> {
        let mut sorted = self.list_all();
        // Descending comparator; reversing the ascending output would flip ties.
        sorted.sort_by(|a, b| b.price.cmp(&a.price));
        sorted
    }

    // =========================================================================
    // Convenience Reads
    // =========================================================================

    /// Looks up a sweet without copying it.
    pub fn get(&self, id: SweetId) -> Option<&Sweet> {
        self.sweets.iter().find(|s| s.id == id)
    }

    /// Whether a sweet with `id` is present.
    pub fn contains(&self, id: SweetId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates in insertion order without copying.
    pub fn iter(&self) -> impl Iterator<Item = &Sweet> {
        self.sweets.iter()
    }

    pub fn len(&self) -> usize {
        self.sweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sweets.is_empty()
    }

    fn position(&self, id: SweetId) -> InventoryResult<usize> {
        self.sweets
            .iter()
            .position(|s| s.id == id)
            .ok_or(InventoryError::NotFound { id })
    }

    fn filtered<F>(&self, predicate: F) -> Vec<Sweet>
    where
        F: Fn(&Sweet) -> bool,
    {
        self.sweets
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> SweetId {
        SweetId::new(raw)
    }

    fn price(units: u32) -> Price {
        Price::from_units(units)
    }

    fn names(sweets: &[Sweet]) -> Vec<&str> {
        sweets.iter().map(|s| s.name.as_str()).collect()
    }

    fn store_with(sweets: Vec<Sweet>) -> InventoryStore {
        let mut store = InventoryStore::new();
        for sweet in sweets {
            store.add(sweet).unwrap();
        }
        store
    }

    fn three_sweets() -> InventoryStore {
        store_with(vec![
            Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20),
            Sweet::new(1002, "Gulab Jamun", "Milk-Based", 30, 15),
            Sweet::new(1003, "Chocolate Barfi", "Chocolate", 60, 10),
        ])
    }

    // -------------------------------------------------------------------------
    // add / list_all
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_appends_in_order() {
        let mut store = InventoryStore::new();
        store
            .add(Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20))
            .unwrap();
        store
            .add(Sweet::new(1002, "Gulab Jamun", "Milk-Based", 10, 30))
            .unwrap();

        let all = store.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(names(&all), vec!["Kaju Katli", "Gulab Jamun"]);
    }

    #[test]
    fn test_add_duplicate_id_rejected_and_store_unchanged() {
        let mut store = store_with(vec![Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20)]);
        let before = store.list_all();

        let err = store
            .add(Sweet::new(1001, "Gulab Jamun", "Milk-Based", 10, 30))
            .unwrap_err();

        assert_eq!(err, InventoryError::DuplicateId { id: id(1001) });
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn test_list_all_is_a_copy() {
        let store = three_sweets();
        let mut listed = store.list_all();
        listed[0].quantity = 0;
        listed.clear();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(id(1001)).unwrap().quantity, 20);
    }

    // -------------------------------------------------------------------------
    // remove_by_id
    // -------------------------------------------------------------------------

    #[test]
    fn test_remove_by_id() {
        let mut store = store_with(vec![
            Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20),
            Sweet::new(1002, "Gulab Jamun", "Milk-Based", 10, 30),
        ]);

        let removed = store.remove_by_id(id(1001)).unwrap();
        assert_eq!(removed.name, "Kaju Katli");

        let sweets = store.list_all();
        assert_eq!(sweets.len(), 1);
        assert_eq!(sweets[0].id, id(1002));
        assert!(!store.contains(id(1001)));
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut store = three_sweets();
        store.remove_by_id(id(1002)).unwrap();
        assert_eq!(
            names(&store.list_all()),
            vec!["Kaju Katli", "Chocolate Barfi"]
        );
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = store_with(vec![Sweet::new(1003, "Rasgulla", "Milk-Based", 15, 25)]);

        let err = store.remove_by_id(id(9999)).unwrap_err();
        assert_eq!(err.to_string(), "Item with ID 9999 not found");
        assert_eq!(store.len(), 1);
    }

    // -------------------------------------------------------------------------
    // find_*
    // -------------------------------------------------------------------------

    #[test]
    fn test_find_by_name_substring_and_case() {
        let store = three_sweets();

        assert_eq!(names(&store.find_by_name("Gulab")), vec!["Gulab Jamun"]);
        assert_eq!(names(&store.find_by_name("GULAB")), vec!["Gulab Jamun"]);
        assert_eq!(names(&store.find_by_name("jam")), vec!["Gulab Jamun"]);
        assert_eq!(
            names(&store.find_by_name("a")),
            vec!["Kaju Katli", "Gulab Jamun", "Chocolate Barfi"]
        );
        assert!(store.find_by_name("halwa").is_empty());
    }

    #[test]
    fn test_find_by_name_empty_matches_all() {
        let store = three_sweets();
        assert_eq!(store.find_by_name(""), store.list_all());
    }

    #[test]
    fn test_find_by_category_exact_ignoring_case() {
        let store = store_with(vec![
            Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20),
            Sweet::new(1002, "Gulab Jamun", "Milk-Based", 30, 15),
            Sweet::new(1003, "Rasgulla", "Milk-Based", 25, 10),
            Sweet::new(1004, "Chocolate Barfi", "Chocolate", 60, 5),
        ]);

        assert_eq!(
            names(&store.find_by_category("Milk-Based")),
            vec!["Gulab Jamun", "Rasgulla"]
        );
        assert_eq!(store.find_by_category("milk-based").len(), 2);
        assert!(store.find_by_category("Milk").is_empty());
    }

    #[test]
    fn test_find_by_price_range_inclusive() {
        let store = store_with(vec![
            Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20),
            Sweet::new(1002, "Gulab Jamun", "Milk-Based", 30, 15),
            Sweet::new(1003, "Chocolate Barfi", "Chocolate", 60, 10),
            Sweet::new(1004, "Rasgulla", "Milk-Based", 20, 25),
        ]);

        assert_eq!(
            names(&store.find_by_price_range(price(25), price(55))),
            vec!["Kaju Katli", "Gulab Jamun"]
        );
        assert_eq!(
            names(&store.find_by_price_range(price(30), price(50))),
            vec!["Kaju Katli", "Gulab Jamun"]
        );
        assert_eq!(
            names(&store.find_by_price_range(price(60), price(60))),
            vec!["Chocolate Barfi"]
        );
    }

    #[test]
    fn test_find_by_price_range_reversed_bounds_is_empty() {
        let store = three_sweets();
        assert!(store.find_by_price_range(price(55), price(25)).is_empty());
    }

    // -------------------------------------------------------------------------
    // sort_*
    // -------------------------------------------------------------------------

    #[test]
    fn test_sort_ascending() {
        let store = three_sweets();
        assert_eq!(
            names(&store.sort_by_price_ascending()),
            vec!["Gulab Jamun", "Kaju Katli", "Chocolate Barfi"]
        );
        // Storage order untouched.
        assert_eq!(store.list_all()[0].name, "Kaju Katli");
    }

    #[test]
    fn test_sort_descending() {
        let store = store_with(vec![
            Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20),
            Sweet::new(1002, "Gulab Jamun", "Milk-Based", 30, 15),
            Sweet::new(1003, "Rasgulla", "Milk-Based", 70, 10),
        ]);
        assert_eq!(
            names(&store.sort_by_price_descending()),
            vec!["Rasgulla", "Kaju Katli", "Gulab Jamun"]
        );
    }

    #[test]
    fn test_sorts_keep_tie_order_in_both_directions() {
        let store = store_with(vec![
            Sweet::new(1, "A", "x", 20, 1),
            Sweet::new(2, "B", "x", 10, 1),
            Sweet::new(3, "C", "x", 20, 1),
            Sweet::new(4, "D", "x", 10, 1),
        ]);

        assert_eq!(names(&store.sort_by_price_ascending()), vec!["B", "D", "A", "C"]);
        assert_eq!(names(&store.sort_by_price_descending()), vec!["A", "C", "B", "D"]);

        let mut reversed = store.sort_by_price_ascending();
        reversed.reverse();
        assert_ne!(reversed, store.sort_by_price_descending());
    }

    // -------------------------------------------------------------------------
    // purchase
    // -------------------------------------------------------------------------

    #[test]
    fn test_purchase_reduces_stock() {
        let mut store = three_sweets();
        let updated = store.purchase(id(1001), 5).unwrap();
        assert_eq!(updated.quantity, 15);
        assert_eq!(store.get(id(1001)).unwrap().quantity, 15);
    }

    #[test]
    fn test_purchase_entire_stock() {
        let mut store = three_sweets();
        store.purchase(id(1003), 10).unwrap();
        assert_eq!(store.get(id(1003)).unwrap().quantity, 0);
        assert!(!store.get(id(1003)).unwrap().is_available());
    }

    #[test]
    fn test_purchase_too_many() {
        let mut store = three_sweets();
        let err = store.purchase(id(1001), 21).unwrap_err();

        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                id: id(1001),
                available: 20,
                requested: 21,
            }
        );
        assert_eq!(err.to_string(), "Not enough stock to complete the purchase");
        assert_eq!(store.get(id(1001)).unwrap().quantity, 20);
    }

    #[test]
    fn test_purchase_unknown_id() {
        let mut store = three_sweets();
        let err = store.purchase(id(4242), 1).unwrap_err();
        assert_eq!(err, InventoryError::NotFound { id: id(4242) });
    }

    #[test]
    fn test_purchase_non_positive_quantity() {
        let mut store = three_sweets();

        for quantity in [0, -3] {
            let err = store.purchase(id(1001), quantity).unwrap_err();
            assert_eq!(
                err,
                InventoryError::InvalidQuantity {
                    operation: StockOperation::Purchase,
                    requested: quantity,
                }
            );
        }
        assert_eq!(store.get(id(1001)).unwrap().quantity, 20);

        // Unknown id wins over a bad quantity.
        let err = store.purchase(id(4242), 0).unwrap_err();
        assert_eq!(err, InventoryError::NotFound { id: id(4242) });
    }

    // -------------------------------------------------------------------------
    // restock
    // -------------------------------------------------------------------------

    #[test]
    fn test_restock_increases_stock() {
        let mut store = three_sweets();
        let updated = store.restock(id(1002), 10).unwrap();
        assert_eq!(updated.quantity, 25);
    }

    #[test]
    fn test_restock_non_positive_checked_before_lookup() {
        let mut store = three_sweets();

        for target in [id(1001), id(4242)] {
            let err = store.restock(target, 0).unwrap_err();
            assert_eq!(err.to_string(), "Restock quantity must be a positive number");

            let err = store.restock(target, -5).unwrap_err();
            assert!(matches!(
                err,
                InventoryError::InvalidQuantity {
                    operation: StockOperation::Restock,
                    requested: -5
                }
            ));
        }
        assert_eq!(store.get(id(1001)).unwrap().quantity, 20);
    }

    #[test]
    fn test_restock_unknown_id() {
        let mut store = three_sweets();
        let err = store.restock(id(4242), 3).unwrap_err();
        assert_eq!(err.to_string(), "Item with ID 4242 not found");
    }

    #[test]
    fn test_restock_overflow_rejected() {
        let mut store = store_with(vec![Sweet::new(1, "Ladoo", "Flour-Based", 5, i64::MAX - 1)]);
        let err = store.restock(id(1), 2).unwrap_err();
        assert_eq!(
            err,
            InventoryError::StockOverflow {
                id: id(1),
                stock: i64::MAX - 1,
                requested: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "Restock of 2 would exceed the maximum stock level"
        );
        assert_eq!(store.get(id(1)).unwrap().quantity, i64::MAX - 1);
    }

    // -------------------------------------------------------------------------
    // End to end
    // -------------------------------------------------------------------------

    #[test]
    fn test_kaju_katli_lifecycle() {
        let mut store = InventoryStore::new();
        store
            .add(Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20))
            .unwrap();

        store.purchase(id(1001), 5).unwrap();
        assert_eq!(store.get(id(1001)).unwrap().quantity, 15);

        store.restock(id(1001), 10).unwrap();
        assert_eq!(store.get(id(1001)).unwrap().quantity, 25);

        let hits = store.find_by_price_range(price(25), price(55));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id(1001));

        store.remove_by_id(id(1001)).unwrap();
        assert!(store.list_all().is_empty());
        assert!(store.is_empty());
    }

    // -------------------------------------------------------------------------
    // Property tests
    // -------------------------------------------------------------------------

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalog() -> impl Strategy<Value = Vec<Sweet>> {
            prop::collection::vec((0u32..100, 0i64..50), 0..25).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (units, qty))| {
                        Sweet::new(i as u32 + 1, format!("Sweet {i}"), "Test", units, qty)
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: distinct-id adds are listed in insertion order.
            #[test]
            fn adds_are_listed_in_order(sweets in catalog()) {
                let store = store_with(sweets.clone());
                prop_assert_eq!(store.list_all(), sweets);
            }

            /// Property: both sorts are stable permutations of the catalog.
            #[test]
            fn sorts_are_stable(sweets in catalog()) {
                let store = store_with(sweets.clone());

                let asc = store.sort_by_price_ascending();
                let desc = store.sort_by_price_descending();
                prop_assert_eq!(asc.len(), sweets.len());
                prop_assert_eq!(desc.len(), sweets.len());

                for pair in asc.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                    if pair[0].price == pair[1].price {
                        prop_assert!(pair[0].id < pair[1].id);
                    }
                }
                for pair in desc.windows(2) {
                    prop_assert!(pair[0].price >= pair[1].price);
                    if pair[0].price == pair[1].price {
                        prop_assert!(pair[0].id < pair[1].id);
                    }
                }
            }

            /// Property: with distinct prices, descending is ascending reversed.
            #[test]
            fn distinct_price_sorts_are_reverses(
                prices in prop::collection::hash_set(0u32..1_000, 0..25),
            ) {
                let sweets: Vec<Sweet> = prices
                    .into_iter()
                    .enumerate()
                    .map(|(i, units)| {
                        Sweet::new(i as u32 + 1, format!("Sweet {i}"), "Test", units, 1)
                    })
                    .collect();
                let store = store_with(sweets);

                let mut asc = store.sort_by_price_ascending();
                asc.reverse();
                prop_assert_eq!(asc, store.sort_by_price_descending());
            }

            /// Property: the range filter returns exactly the in-range sweets.
            #[test]
            fn price_range_is_exact(sweets in catalog(), a in 0u32..100, b in 0u32..100) {
                let store = store_with(sweets.clone());
                let (min, max) = (price(a), price(b));

                let expected: Vec<Sweet> = sweets
                    .into_iter()
                    .filter(|s| min <= s.price && s.price <= max)
                    .collect();
                prop_assert_eq!(store.find_by_price_range(min, max), expected);
            }

            /// Property: a failed purchase never changes the store.
            #[test]
            fn failed_purchase_leaves_store_unchanged(
                sweets in catalog(),
                target in 0u32..30,
                quantity in -5i64..80,
            ) {
                let mut store = store_with(sweets);
                let before = store.list_all();
                let stock = store.get(id(target)).map(|s| s.quantity);

                match store.purchase(id(target), quantity).map(|s| s.quantity) {
                    Ok(remaining) => {
                        prop_assert_eq!(Some(remaining + quantity), stock);
                    }
                    Err(_) => prop_assert_eq!(store.list_all(), before),
                }
            }
        }
    }
}
