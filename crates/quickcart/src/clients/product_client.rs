//! # Product Client
//!
//! Catalog management and product suggestions on top of the product collection.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use crate::search::{self, SUGGESTION_LIMIT};
use async_trait::async_trait;
use docstore::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: DocumentClient<Product>,
}

impl ProductClient {
    pub fn new(inner: DocumentClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The whole catalog, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Products matching `query`, at most [`SUGGESTION_LIMIT`] of them.
    ///
    /// Blank queries return an empty list without contacting the catalog.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<Product>, ProductError> {
        if search::is_blank(query) {
            return Ok(Vec::new());
        }
        // No server-side text search: fetch the catalog and filter here.
        let products = self.inner.list().await.map_err(Self::map_error)?;
        let found = search::suggest(&products, query, SUGGESTION_LIMIT);
        debug!(catalog = products.len(), found = found.len(), "Suggestions");
        Ok(found)
    }
}

#[async_trait]
impl CollectionClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &DocumentClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e.downcast::<ProductError>() {
            Ok(e) => e,
            Err(StoreError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
