//! # Catalog Suggestions
//!
//! Case-insensitive substring search over a product's name, serial number and
//! category.

use crate::model::Product;

/// Maximum number of suggestions offered while typing.
pub const SUGGESTION_LIMIT: usize = 5;

/// `true` when the query has nothing to search for.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Whether `product` contains `query` in its name, serial number or category,
/// ignoring case.
pub fn matches(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&product.name, &product.serial_number, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Up to `limit` products matching `query`, in catalog order.
///
/// A blank query yields nothing.
pub fn suggest(products: &[Product], query: &str, limit: usize) -> Vec<Product> {
    if is_blank(query) {
        return Vec::new();
    }
    products
        .iter()
        .filter(|product| matches(product, query))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, ProductCreate, ProductId};

    fn product(id: u32, name: &str, serial: &str, category: &str) -> Product {
        Product::new(
            ProductId(id),
            ProductCreate {
                name: name.to_string(),
                serial_number: serial.to_string(),
                category: category.to_string(),
                price: 1.0,
                quantity: 1,
                image: None,
                location: Location::new(0, 0, 0),
            },
        )
    }

    #[test]
    fn test_blank_queries_yield_nothing() {
        let catalog = vec![product(1, "Whole Milk", "M1", "Dairy")];
        assert!(suggest(&catalog, "", SUGGESTION_LIMIT).is_empty());
        assert!(suggest(&catalog, "   ", SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let catalog = vec![
            product(1, "Whole Milk", "M1", "Dairy"),
            product(2, "Sourdough", "B2", "Bakery"),
        ];
        let found = suggest(&catalog, "milk", SUGGESTION_LIMIT);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Whole Milk");

        // Not prefix-only: "ough" sits in the middle of the name.
        assert_eq!(suggest(&catalog, "OUGH", SUGGESTION_LIMIT)[0].id, ProductId(2));
    }

    #[test]
    fn test_matches_serial_number_and_category() {
        let milk = product(1, "Whole Milk", "P123", "Dairy");
        assert!(matches(&milk, "p12"));
        assert!(matches(&milk, "AIR"));
        assert!(!matches(&milk, "bread"));
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let milk = product(1, "Whole Milk", "P123", "Dairy");
        assert!(!matches(&milk, "mlk"));
    }

    #[test]
    fn test_results_capped_at_limit() {
        let catalog: Vec<Product> = (1..=8)
            .map(|i| product(i, &format!("Milk {}", i), &format!("M{}", i), "Dairy"))
            .collect();
        let found = suggest(&catalog, "milk", SUGGESTION_LIMIT);
        assert_eq!(found.len(), 5);
        let ids: Vec<u32> = found.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
