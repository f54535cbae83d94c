//! # Route Optimization
//!
//! Orders a shopping list the way a shopper walks the store: lowest floor
//! first, then by aisle, then by row.

use crate::model::ShoppingListItem;

/// Returns the items ordered by product location.
///
/// The sort is stable: products sharing a shelf keep the order they had on the
/// list. The input is left untouched and quantities are copied as they are.
///
/// ```rust
/// use quickcart::route::optimize;
///
/// assert!(optimize(&[]).is_empty());
/// ```
pub fn optimize(items: &[ShoppingListItem]) -> Vec<ShoppingListItem> {
    let mut route = items.to_vec();
    route.sort_by_key(|item| item.product.location);
    route
}
