//! [`Document`] implementation for [`User`] profiles.

use super::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use docstore::Document;

#[async_trait]
impl Document for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.email.trim().is_empty() {
            return Err(UserError::ValidationError("email is required".to_string()));
        }
        Ok(User::new(id, params))
    }

    /// # Fields Updated
    /// - `name`: display name
    /// - `is_admin`: catalog management flag
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(is_admin) = update.is_admin {
            self.is_admin = is_admin;
        }
        Ok(())
    }
}
