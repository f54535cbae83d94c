//! # List Client
//!
//! Creation, saving and per-user live queries for shopping lists.
use crate::list_actor::ListError;
use crate::model::{ListId, ShoppingList, ShoppingListCreate, ShoppingListUpdate, UserId};
use async_trait::async_trait;
use docstore::{CollectionClient, DocumentClient, StoreError, Subscription};
use tracing::{debug, instrument};

/// Client for interacting with the ShoppingList actor.
#[derive(Clone)]
pub struct ListClient {
    inner: DocumentClient<ShoppingList>,
}

impl ListClient {
    pub fn new(inner: DocumentClient<ShoppingList>) -> Self {
        Self { inner }
    }

    /// Creates an empty list and returns it as stored.
    #[instrument(skip(self))]
    pub async fn create_list(&self, params: ShoppingListCreate) -> Result<ShoppingList, ListError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.inner
            .get(id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| ListError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_list(
        &self,
        id: ListId,
        update: ShoppingListUpdate,
    ) -> Result<ShoppingList, ListError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Writes the name and items of a locally edited list back to the collection.
    #[instrument(skip(self, list), fields(list_id = %list.id, items = list.items.len()))]
    pub async fn save_list(&self, list: &ShoppingList) -> Result<ShoppingList, ListError> {
        debug!("Sending request");
        self.inner
            .update(list.id.clone(), ShoppingListUpdate::from(list))
            .await
            .map_err(Self::map_error)
    }

    /// Live query over the lists owned by `user_id`.
    #[instrument(skip(self))]
    pub async fn subscribe_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Subscription<ShoppingList>, ListError> {
        debug!("Opening live query");
        self.inner
            .subscribe(move |list: &ShoppingList| list.user_id == user_id)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl CollectionClient<ShoppingList> for ListClient {
    type Error = ListError;

    fn inner(&self) -> &DocumentClient<ShoppingList> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e.downcast::<ListError>() {
            Ok(e) => e,
            Err(StoreError::NotFound(id)) => ListError::NotFound(id),
            Err(other) => ListError::ActorCommunicationError(other.to_string()),
        }
    }
}
