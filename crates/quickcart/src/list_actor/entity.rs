//! [`Document`] implementation for [`ShoppingList`].
//!
//! Lists depend on the user collection: `on_create` refuses lists whose owner
//! has no profile, so the context is a [`UserClient`].

use super::ListError;
use crate::clients::UserClient;
use crate::model::{ListId, ShoppingList, ShoppingListCreate, ShoppingListUpdate, ValidationError};
use async_trait::async_trait;
use docstore::{CollectionClient, Document};
use tracing::{debug, instrument};

#[async_trait]
impl Document for ShoppingList {
    type Id = ListId;
    type Create = ShoppingListCreate;
    type Update = ShoppingListUpdate;
    type Context = UserClient;
    type Error = ListError;

    fn from_create_params(id: ListId, params: ShoppingListCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ValidationError::Required("list name").into());
        }
        Ok(ShoppingList::new(id, params))
    }

    #[instrument(skip(self, users))]
    async fn on_create(&mut self, users: &UserClient) -> Result<(), Self::Error> {
        debug!(list_id = %self.id, user_id = %self.user_id, "Checking list owner");
        match users.get(self.user_id.clone()).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ListError::InvalidOwner(self.user_id.to_string())),
            Err(e) => Err(ListError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        update: ShoppingListUpdate,
        _users: &UserClient,
    ) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(ValidationError::Required("list name").into());
            }
        }
        self.apply(update);
        Ok(())
    }
}
