//! # User Client
//!
//! Profile reads and writes on the user collection.
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use docstore::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: DocumentClient<User>,
}

impl UserClient {
    pub fn new(inner: DocumentClient<User>) -> Self {
        Self { inner }
    }

    /// Stores a profile under the uid issued by the identity provider.
    #[instrument(skip(self))]
    pub async fn create_profile(&self, id: UserId, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner
            .create_with_id(id, params)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl CollectionClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &DocumentClient<User> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e.downcast::<UserError>() {
            Ok(e) => e,
            Err(StoreError::NotFound(id)) => UserError::NotFound(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
