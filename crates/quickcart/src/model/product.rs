//! Products of the store catalog.
//!
//! # Document Store
//! [`Product`] implements the [`Document`](docstore::Document) trait, so a
//! [`DocumentActor`](docstore::DocumentActor) can manage the catalog:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Image used when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Physical position of a product in the store.
///
/// Ordering compares `floor`, then `aisle`, then `row`, which is the order a
/// shopper walks the store in. Negative floors (basements) sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub floor: i32,
    pub aisle: i32,
    pub row: i32,
}

impl Location {
    pub fn new(floor: i32, aisle: i32, row: i32) -> Self {
        Self { floor, aisle, row }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor {}, Aisle {}, Row {}", self.floor, self.aisle, self.row)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub price: f64,
    /// Units in stock.
    pub quantity: u32,
    #[serde(default = "placeholder_image")]
    pub image: String,
    pub location: Location,
}

impl Product {
    /// Builds a product from its creation payload, filling in the placeholder
    /// image when none was given.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            serial_number: params.serial_number,
            category: params.category,
            price: params.price,
            quantity: params.quantity,
            image: params
                .image
                .filter(|image| !image.trim().is_empty())
                .unwrap_or_else(placeholder_image),
            location: params.location,
        }
    }

    /// Applies the fields present in `update`.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(serial_number) = update.serial_number {
            self.serial_number = serial_number;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(image) = update.image {
            self.image = if image.trim().is_empty() {
                placeholder_image()
            } else {
                image
            };
        }
        if let Some(location) = update.location {
            self.location = location;
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
    pub location: Location,
}

impl ProductCreate {
    /// Checks the fields an admin must fill in before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("serial number", &self.serial_number)?;
        require("category", &self.category)?;
        check_price(self.price)
    }
}

/// Partial update of a catalog product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub image: Option<String>,
    pub location: Option<Location>,
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(serial_number) = &self.serial_number {
            require("serial number", serial_number)?;
        }
        if let Some(category) = &self.category {
            require("category", category)?;
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(price));
    }
    Ok(())
}
