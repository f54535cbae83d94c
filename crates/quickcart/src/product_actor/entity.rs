//! [`Document`] implementation for the catalog's [`Product`].
//!
//! The collection re-checks payloads on write, the way database security rules
//! would, even though the session validates them before sending.

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use docstore::Document;

#[async_trait]
impl Document for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(Product::new(id, params))
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        update.validate()?;
        self.apply(update);
        Ok(())
    }
}
