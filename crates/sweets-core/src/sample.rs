//! Sample catalog used to seed a fresh store in development.

use crate::types::Sweet;

/// The five sweets a new shop starts with.
///
/// | id   | name        | category        | price | qty |
/// |------|-------------|-----------------|-------|-----|
/// | 1001 | Kaju Katli  | Nut-Based       | 50    | 20  |
/// | 1002 | Gajar Halwa | Vegetable-Based | 30    | 15  |
/// | 1003 | Gulab Jamun | Milk-Based      | 10    | 50  |
/// | 1004 | Jalebi      | Flour-Based     | 15    | 40  |
/// | 1005 | Rasgulla    | Milk-Based      | 12    | 30  |
pub fn sample_catalog() -> Vec<Sweet> {
    vec![
        Sweet::new(1001, "Kaju Katli", "Nut-Based", 50, 20),
        Sweet::new(1002, "Gajar Halwa", "Vegetable-Based", 30, 15),
        Sweet::new(1003, "Gulab Jamun", "Milk-Based", 10, 50),
        Sweet::new(1004, "Jalebi", "Flour-Based", 15, 40),
        Sweet::new(1005, "Rasgulla", "Milk-Based", 12, 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InventoryStore;

    #[test]
    fn test_sample_catalog_loads_into_store() {
        let mut store = InventoryStore::new();
        for sweet in sample_catalog() {
            store.add(sweet).unwrap();
        }

        assert_eq!(store.len(), 5);
        assert_eq!(store.find_by_category("milk-based").len(), 2);
        assert_eq!(store.find_by_name("GULAB")[0].name, "Gulab Jamun");
    }
}
