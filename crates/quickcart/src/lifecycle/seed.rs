//! Sample catalog for demos and fresh installs.

use crate::clients::ProductClient;
use crate::model::{Location, ProductCreate};
use crate::product_actor::ProductError;
use tracing::info;

fn product(
    name: &str,
    serial_number: &str,
    category: &str,
    price: f64,
    quantity: u32,
    (floor, aisle, row): (i32, i32, i32),
) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        serial_number: serial_number.to_string(),
        category: category.to_string(),
        price,
        quantity,
        image: None,
        location: Location::new(floor, aisle, row),
    }
}

/// Products spread over the basement, ground and first floor.
pub fn sample_catalog() -> Vec<ProductCreate> {
    vec![
        product("Whole Milk", "DAI-001", "Dairy", 2.99, 120, (0, 4, 2)),
        product("Greek Yogurt", "DAI-014", "Dairy", 4.49, 60, (0, 4, 3)),
        product("Sourdough Bread", "BAK-003", "Bakery", 3.75, 40, (0, 1, 1)),
        product("Bananas", "PRO-101", "Produce", 0.59, 300, (0, 2, 5)),
        product("Basmati Rice", "PAN-220", "Pantry", 6.99, 80, (1, 3, 2)),
        product("Olive Oil", "PAN-231", "Pantry", 9.49, 45, (1, 3, 4)),
        product("Laundry Detergent", "HOM-510", "Household", 12.99, 30, (1, 7, 1)),
        product("Sparkling Water", "BEV-042", "Beverages", 5.25, 150, (-1, 2, 1)),
        product("Frozen Peas", "FRZ-008", "Frozen", 2.19, 90, (-1, 5, 3)),
    ]
}

/// Inserts [`sample_catalog`] when the catalog is empty.
///
/// Returns how many products were added; zero when the catalog already had
/// data.
pub async fn seed_catalog(products: &ProductClient) -> Result<usize, ProductError> {
    if !products.list_products().await?.is_empty() {
        info!("Catalog already contains data, skipping seed");
        return Ok(0);
    }

    let catalog = sample_catalog();
    let count = catalog.len();
    for params in catalog {
        products.create_product(params).await?;
    }
    info!(count, "Seeded catalog");
    Ok(count)
}
