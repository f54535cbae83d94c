//! A user's shopping list.
//!
//! # Document Store
//! [`ShoppingList`] implements the [`Document`](docstore::Document) trait,
//! allowing it to be managed by a [`DocumentActor`](docstore::DocumentActor).
//!
//! The item methods below are purely local: they edit an in-memory copy that
//! is written back to the collection only on an explicit save.

use crate::model::{Product, ProductId, UserId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for shopping lists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListId(pub u32);

impl From<u32> for ListId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "list_{}", self.0)
    }
}

/// A product snapshot and how many of it to pick up.
///
/// The product is copied into the item, so later catalog edits do not reach
/// lists that already hold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub product: Product,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: ListId,
    pub user_id: UserId,
    pub name: String,
    pub items: Vec<ShoppingListItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an empty list.
#[derive(Debug, Clone)]
pub struct ShoppingListCreate {
    pub user_id: UserId,
    pub name: String,
}

/// Partial update of a stored list.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListUpdate {
    pub name: Option<String>,
    pub items: Option<Vec<ShoppingListItem>>,
}

impl From<&ShoppingList> for ShoppingListUpdate {
    /// Everything a save writes back.
    fn from(list: &ShoppingList) -> Self {
        Self {
            name: Some(list.name.clone()),
            items: Some(list.items.clone()),
        }
    }
}

impl ShoppingList {
    /// Creates an empty list.
    pub fn new(id: ListId, params: ShoppingListCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: params.user_id,
            name: params.name,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The item holding `product_id`, if any.
    pub fn item(&self, product_id: &ProductId) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Adds `quantity` of `product`.
    ///
    /// A product already on the list gets its quantity increased instead of a
    /// second entry. Quantities below 1, and merges past `i32::MAX`, are
    /// rejected and leave the list as is.
    pub fn add_item(&mut self, product: Product, quantity: i32) -> Result<(), ValidationError> {
        if quantity < 1 {
            return Err(ValidationError::InvalidQuantity(quantity));
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(ValidationError::QuantityOverflow(existing.quantity, quantity))?;
            }
            None => self.items.push(ShoppingListItem { product, quantity }),
        }
        self.touch();
        Ok(())
    }

    /// Removes the item for `product_id`. Missing items are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|item| &item.product.id != product_id);
        self.touch();
    }

    /// Sets the quantity of the item for `product_id`. Missing items are ignored.
    ///
    /// The value is stored as given: zero and negative quantities are kept,
    /// not clamped and not treated as a removal.
    pub fn update_item_quantity(&mut self, product_id: &ProductId, quantity: i32) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| &item.product.id == product_id)
        {
            item.quantity = quantity;
        }
        self.touch();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Applies the fields present in `update`.
    pub fn apply(&mut self, update: ShoppingListUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(items) = update.items {
            self.items = items;
        }
        self.touch();
    }

    /// Units across all items.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    /// Price of every item at its snapshot price.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.product.price * f64::from(item.quantity))
            .sum()
    }

    fn touch(&mut self) {
        // Never move backwards, even if the wall clock does.
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, ProductCreate};

    fn product(id: u32, name: &str, price: f64) -> Product {
        Product::new(
            ProductId(id),
            ProductCreate {
                name: name.to_string(),
                serial_number: format!("SN{}", id),
                category: "Grocery".to_string(),
                price,
                quantity: 50,
                image: None,
                location: Location::new(0, id as i32, 1),
            },
        )
    }

    fn list() -> ShoppingList {
        ShoppingList::new(
            ListId(1),
            ShoppingListCreate {
                user_id: UserId::from("uid_1"),
                name: "Weekly".to_string(),
            },
        )
    }

    #[test]
    fn test_adding_same_product_twice_merges_quantities() {
        let mut list = list();
        list.add_item(product(1, "Whole Milk", 2.0), 2).unwrap();
        list.add_item(product(1, "Whole Milk", 2.0), 3).unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].quantity, 5);
    }

    #[test]
    fn test_add_appends_distinct_products_in_order() {
        let mut list = list();
        list.add_item(product(2, "Bread", 1.5), 1).unwrap();
        list.add_item(product(1, "Milk", 2.0), 4).unwrap();

        let ids: Vec<u32> = list.items.iter().map(|item| item.product.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(list.total_items(), 5);
        assert_eq!(list.total_price(), 9.5);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut list = list();
        let before = list.clone();

        assert_eq!(
            list.add_item(product(1, "Milk", 2.0), 0),
            Err(ValidationError::InvalidQuantity(0))
        );
        assert_eq!(
            list.add_item(product(1, "Milk", 2.0), -2),
            Err(ValidationError::InvalidQuantity(-2))
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_missing_product_is_a_no_op() {
        let mut list = list();
        list.add_item(product(1, "Milk", 2.0), 1).unwrap();
        let items_before = list.items.clone();

        list.remove_item(&ProductId(42));
        assert_eq!(list.items, items_before);

        list.remove_item(&ProductId(1));
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_update_quantity_stores_zero_and_negative_values_unclamped() {
        let mut list = list();
        list.add_item(product(1, "Milk", 2.0), 3).unwrap();

        list.update_item_quantity(&ProductId(1), 0);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].quantity, 0);

        list.update_item_quantity(&ProductId(1), -4);
        assert_eq!(list.items[0].quantity, -4);

        list.update_item_quantity(&ProductId(9), 10);
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_add_rejects_merge_past_max_quantity() {
        let mut list = list();
        list.add_item(product(1, "Milk", 2.0), i32::MAX).unwrap();
        let before = list.clone();

        assert_eq!(
            list.add_item(product(1, "Milk", 2.0), 1),
            Err(ValidationError::QuantityOverflow(i32::MAX, 1))
        );
        assert_eq!(list, before);
    }

    /// Moves `updated_at` an hour into the past.
    fn age(list: &mut ShoppingList) -> DateTime<Utc> {
        list.updated_at -= chrono::Duration::hours(1);
        list.updated_at
    }

    #[test]
    fn test_every_mutation_refreshes_updated_at() {
        let mut list = list();
        let created = list.created_at;

        let old = age(&mut list);
        list.add_item(product(1, "Milk", 2.0), 1).unwrap();
        assert!(list.updated_at > old);

        let old = age(&mut list);
        list.update_item_quantity(&ProductId(1), 2);
        assert!(list.updated_at > old);

        let old = age(&mut list);
        list.update_item_quantity(&ProductId(9), 2);
        assert!(list.updated_at > old);

        let old = age(&mut list);
        list.remove_item(&ProductId(9));
        assert!(list.updated_at > old);

        let old = age(&mut list);
        list.remove_item(&ProductId(1));
        assert!(list.updated_at > old);

        let old = age(&mut list);
        list.rename("Party");
        assert_eq!(list.name, "Party");
        assert!(list.updated_at > old);

        let old = age(&mut list);
        list.apply(ShoppingListUpdate {
            name: Some("Weekly".to_string()),
            ..Default::default()
        });
        assert!(list.updated_at > old);

        assert_eq!(list.created_at, created);
    }

    #[test]
    fn test_items_hold_a_copy_of_the_product() {
        let mut catalog_entry = product(1, "Milk", 2.0);
        let mut list = list();
        list.add_item(catalog_entry.clone(), 1).unwrap();

        catalog_entry.price = 9.99;
        assert_eq!(list.items[0].product.price, 2.0);
    }
}
