//! # Shop Session
//!
//! [`ShopSession`] is the state a signed-in user works with: who they are,
//! the list they are editing and every list they own. Views hold the session
//! by handle; nothing here is global.
//!
//! ## State
//!
//! - **Current user**: the profile loaded from the user collection after the
//!   identity provider reports a session.
//! - **Current list**: a local copy edited in place. Item operations never
//!   touch the collection; [`ShopSession::save_current_list`] writes it back.
//! - **All lists**: a live query over the user's lists. Remote changes land
//!   here and never overwrite the current list.
//!
//! ## Outcomes
//!
//! Every operation reports through the [`Notifier`]: an `Info` notification on
//! success, a `Destructive` one on failure. Operations also return
//! `Result<_, SessionError>`. Validation happens before any collection is
//! contacted, and a failed remote write leaves local state as it was.

pub mod error;
pub mod notification;

pub use error::SessionError;
pub use notification::{Notification, Notifier, Variant};

use crate::clients::{ListClient, ProductClient, UserClient};
use crate::identity::{AuthUser, IdentityProvider};
use crate::model::{
    ListId, Product, ProductCreate, ProductId, ProductUpdate, ShoppingList, ShoppingListCreate,
    ShoppingListItem, User, UserCreate, ValidationError,
};
use crate::list_actor::ListError;
use crate::product_actor::ProductError;
use crate::route;
use docstore::{CollectionClient, Snapshot, Subscription};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, instrument, warn};

pub struct ShopSession {
    identity: Arc<dyn IdentityProvider>,
    products: ProductClient,
    users: UserClient,
    list_client: ListClient,
    notifier: Notifier,
    current_user: Option<User>,
    current_list: Option<ShoppingList>,
    feed: Option<Subscription<ShoppingList>>,
}

impl ShopSession {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        products: ProductClient,
        users: UserClient,
        list_client: ListClient,
        notifier: Notifier,
    ) -> Self {
        Self {
            identity,
            products,
            users,
            list_client,
            notifier,
            current_user: None,
            current_list: None,
            feed: None,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_list(&self) -> Option<&ShoppingList> {
        self.current_list.as_ref()
    }

    /// Latest snapshot of the signed-in user's lists; empty while signed out.
    pub fn lists(&self) -> Snapshot<ShoppingList> {
        match &self.feed {
            Some(feed) => feed.current(),
            None => Arc::from(Vec::new()),
        }
    }

    /// Waits for the next snapshot of the user's lists.
    ///
    /// Returns `None` while signed out or once the list collection is gone.
    pub async fn lists_changed(&mut self) -> Option<Snapshot<ShoppingList>> {
        self.feed.as_mut()?.changed().await.ok()
    }

    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    // =========================================================================
    // AUTHENTICATION
    // =========================================================================

    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: SecretString) -> Result<(), SessionError> {
        match self.try_login(email, password).await {
            Ok(()) => {
                self.notifier.info("Login Successful", "Welcome back!");
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Login Failed", e.to_string());
                Err(e)
            }
        }
    }

    async fn try_login(&mut self, email: &str, password: SecretString) -> Result<(), SessionError> {
        let auth = self.identity.sign_in(email, password).await?;
        self.on_session_changed(Some(auth)).await
    }

    /// Creates the account and a non-admin profile, then signs in.
    ///
    /// If the profile cannot be stored, the new account is signed out again.
    #[instrument(skip(self, password))]
    pub async fn register(
        &mut self,
        email: &str,
        password: SecretString,
        name: &str,
    ) -> Result<(), SessionError> {
        match self.try_register(email, password, name).await {
            Ok(()) => {
                self.notifier.info(
                    "Registration Successful",
                    format!("Welcome to QuickCart, {}!", name),
                );
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Registration Failed", e.to_string());
                Err(e)
            }
        }
    }

    async fn try_register(
        &mut self,
        email: &str,
        password: SecretString,
        name: &str,
    ) -> Result<(), SessionError> {
        let auth = self.identity.sign_up(email, password, name).await?;
        let profile = UserCreate {
            email: auth.email.clone(),
            name: name.to_string(),
            is_admin: false,
        };
        if let Err(e) = self.users.create_profile(auth.uid.clone(), profile).await {
            // The account exists but has no profile; leave the provider signed out.
            if let Err(sign_out) = self.identity.sign_out().await {
                warn!(error = %sign_out, "Sign-out after failed registration failed");
            }
            return Err(e.into());
        }
        self.on_session_changed(Some(auth)).await
    }

    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        if let Err(e) = self.identity.sign_out().await {
            warn!(error = %e, "Sign-out failed");
            self.notifier
                .error("Logout Failed", "Failed to log out. Please try again.");
            return Err(e.into());
        }
        self.on_session_changed(None).await?;
        self.notifier
            .info("Logged Out", "You have been successfully logged out.");
        Ok(())
    }

    /// Re-reads the provider's current session, e.g. at startup or after the
    /// profile changed elsewhere.
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        let auth = self.identity.session().borrow().clone();
        self.on_session_changed(auth).await
    }

    /// Applies a session change reported by the identity provider.
    ///
    /// A signed-in account gets its profile loaded (or created, for accounts
    /// without one) and a live query over its lists. `None` clears the user,
    /// the current list and the list feed.
    #[instrument(skip(self, auth), fields(uid = auth.as_ref().map(|a| a.uid.to_string())))]
    pub async fn on_session_changed(&mut self, auth: Option<AuthUser>) -> Result<(), SessionError> {
        let Some(auth) = auth else {
            debug!("Session cleared");
            self.clear();
            return Ok(());
        };

        if self.current_user.as_ref().map(|user| &user.id) != Some(&auth.uid) {
            self.current_list = None;
        }

        let profile = match self.load_profile(&auth).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "Failed to load profile");
                self.clear();
                return Err(e);
            }
        };
        self.current_user = Some(profile);

        match self.list_client.subscribe_for_user(auth.uid).await {
            Ok(feed) => {
                debug!(lists = feed.current().len(), "Subscribed to lists");
                self.feed = Some(feed);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to subscribe to lists");
                self.feed = None;
                self.notifier
                    .error("Error", "Failed to load your shopping lists.");
                Err(e.into())
            }
        }
    }

    async fn load_profile(&self, auth: &AuthUser) -> Result<User, SessionError> {
        if let Some(profile) = self.users.get(auth.uid.clone()).await? {
            return Ok(profile);
        }
        let params = UserCreate {
            email: auth.email.clone(),
            name: auth.display_name.clone().unwrap_or_default(),
            is_admin: false,
        };
        self.users
            .create_profile(auth.uid.clone(), params.clone())
            .await?;
        Ok(User::new(auth.uid.clone(), params))
    }

    fn clear(&mut self) {
        self.current_user = None;
        self.current_list = None;
        self.feed = None;
    }

    fn require_user(&self) -> Result<&User, SessionError> {
        self.current_user.as_ref().ok_or(SessionError::NotSignedIn)
    }

    fn require_admin(&self) -> Result<&User, SessionError> {
        let user = self.require_user()?;
        if !user.is_admin {
            self.notifier
                .error("Access Denied", "Only administrators can manage the catalog.");
            return Err(SessionError::NotAuthorized);
        }
        Ok(user)
    }

    /// Reads the stored list and checks the signed-in user owns it.
    ///
    /// The stored owner is used, never the one on a caller's copy.
    async fn require_owner(&self, id: &ListId) -> Result<ShoppingList, SessionError> {
        let user_id = self.require_user()?.id.clone();
        match self.list_client.get(id.clone()).await? {
            Some(stored) if stored.user_id == user_id => Ok(stored),
            Some(stored) => {
                warn!(list_id = %id, owner = %stored.user_id, "List belongs to another user");
                self.notifier.error(
                    "Access Denied",
                    "You can only change your own shopping lists.",
                );
                Err(SessionError::NotOwner(id.clone()))
            }
            None => Err(ListError::NotFound(id.to_string()).into()),
        }
    }

    fn reject(&self, e: ValidationError) -> SessionError {
        self.notifier.error("Validation Error", e.to_string());
        e.into()
    }

    // =========================================================================
    // LISTS
    // =========================================================================

    /// Creates an empty list and makes it the current list.
    #[instrument(skip(self))]
    pub async fn create_list(&mut self, name: &str) -> Result<ShoppingList, SessionError> {
        let user_id = self.require_user()?.id.clone();
        if name.trim().is_empty() {
            return Err(self.reject(ValidationError::Required("list name")));
        }

        let params = ShoppingListCreate {
            user_id,
            name: name.to_string(),
        };
        match self.list_client.create_list(params).await {
            Ok(list) => {
                self.notifier.info(
                    "List Created",
                    format!("Shopping list \"{}\" has been created.", list.name),
                );
                self.current_list = Some(list.clone());
                Ok(list)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create list");
                self.notifier.error("Error", "Failed to create shopping list.");
                Err(e.into())
            }
        }
    }

    /// Writes `list` to the collection. When it is the current list, the
    /// current list is replaced by the stored version.
    #[instrument(skip(self, list), fields(list_id = %list.id))]
    pub async fn update_list(&mut self, list: &ShoppingList) -> Result<ShoppingList, SessionError> {
        self.require_user()?;
        if list.name.trim().is_empty() {
            return Err(self.reject(ValidationError::Required("list name")));
        }

        let result = match self.require_owner(&list.id).await {
            Ok(_) => self.list_client.save_list(list).await.map_err(SessionError::from),
            Err(e) => Err(e),
        };
        match result {
            Ok(stored) => {
                if self.current_list.as_ref().map(|current| &current.id) == Some(&stored.id) {
                    self.current_list = Some(stored.clone());
                }
                self.notifier.info(
                    "List Updated",
                    format!("Shopping list \"{}\" has been updated.", stored.name),
                );
                Ok(stored)
            }
            Err(e @ SessionError::NotOwner(_)) => Err(e),
            Err(e) => {
                warn!(error = %e, "Failed to update list");
                self.notifier.error("Error", "Failed to update shopping list.");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_list(&mut self, id: &ListId) -> Result<(), SessionError> {
        self.require_user()?;
        let result = match self.require_owner(id).await {
            Ok(stored) => self
                .list_client
                .delete(id.clone())
                .await
                .map(|()| stored.name)
                .map_err(SessionError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(name) => {
                if self.current_list.as_ref().map(|current| &current.id) == Some(id) {
                    self.current_list = None;
                }
                self.notifier.info(
                    "List Deleted",
                    format!("Shopping list \"{}\" has been deleted.", name),
                );
                Ok(())
            }
            Err(e @ SessionError::NotOwner(_)) => Err(e),
            Err(e) => {
                warn!(error = %e, "Failed to delete list");
                self.notifier.error("Error", "Failed to delete shopping list.");
                Err(e)
            }
        }
    }

    /// Opens `list` for editing, or closes the current list with `None`.
    pub fn set_current_list(&mut self, list: Option<ShoppingList>) {
        debug!(list_id = ?list.as_ref().map(|l| l.id.to_string()), "Current list");
        self.current_list = list;
    }

    // =========================================================================
    // CURRENT LIST
    // =========================================================================

    /// Adds `quantity` of `product` to the current list, merging with an item
    /// for the same product.
    pub fn add_item_to_current_list(
        &mut self,
        product: &Product,
        quantity: i32,
    ) -> Result<(), SessionError> {
        let list = self
            .current_list
            .as_mut()
            .ok_or(SessionError::NoCurrentList)?;
        if let Err(e) = list.add_item(product.clone(), quantity) {
            self.notifier.error("Validation Error", e.to_string());
            return Err(e.into());
        }
        self.notifier.info(
            "Item Added",
            format!("{} added to your shopping list.", product.name),
        );
        Ok(())
    }

    /// Missing products are ignored.
    pub fn remove_item_from_current_list(&mut self, product_id: &ProductId) -> Result<(), SessionError> {
        self.current_list
            .as_mut()
            .ok_or(SessionError::NoCurrentList)?
            .remove_item(product_id);
        Ok(())
    }

    /// Stores `quantity` as given, including zero and negative values.
    pub fn update_item_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i32,
    ) -> Result<(), SessionError> {
        self.current_list
            .as_mut()
            .ok_or(SessionError::NoCurrentList)?
            .update_item_quantity(product_id, quantity);
        Ok(())
    }

    /// Items of the current list in walking order. The list itself is not
    /// reordered.
    pub fn optimize_route(&self) -> Result<Vec<ShoppingListItem>, SessionError> {
        let list = self
            .current_list
            .as_ref()
            .ok_or(SessionError::NoCurrentList)?;
        let route = route::optimize(&list.items);
        self.notifier.info(
            "Route Optimized",
            "Your shopping route has been optimized for efficiency.",
        );
        Ok(route)
    }

    /// Writes the current list back to the collection.
    #[instrument(skip(self))]
    pub async fn save_current_list(&mut self) -> Result<ShoppingList, SessionError> {
        let list = self
            .current_list
            .as_ref()
            .ok_or(SessionError::NoCurrentList)?;

        let result = match self.require_owner(&list.id).await {
            Ok(_) => self.list_client.save_list(list).await.map_err(SessionError::from),
            Err(e) => Err(e),
        };
        match result {
            Ok(saved) => {
                self.notifier.info(
                    "List Saved",
                    format!("Shopping list \"{}\" has been saved.", saved.name),
                );
                self.current_list = Some(saved.clone());
                Ok(saved)
            }
            Err(e @ SessionError::NotOwner(_)) => Err(e),
            Err(e) => {
                warn!(error = %e, "Failed to save list");
                self.notifier.error("Error", "Failed to save shopping list.");
                Err(e)
            }
        }
    }

    /// Up to five catalog products matching `query`.
    ///
    /// Failures are reported as a notification and yield no suggestions.
    pub async fn suggest_products(&self, query: &str) -> Vec<Product> {
        match self.products.suggest(query).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "Failed to suggest products");
                self.notifier.error("Error", "Failed to search for products.");
                Vec::new()
            }
        }
    }

    // =========================================================================
    // CATALOG (admin)
    // =========================================================================

    pub async fn list_products(&self) -> Result<Vec<Product>, SessionError> {
        self.require_admin()?;
        self.products.list_products().await.map_err(|e| {
            warn!(error = %e, "Failed to load products");
            self.notifier.error("Error", "Failed to load products.");
            e.into()
        })
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, SessionError> {
        self.require_admin()?;
        if let Err(e) = params.validate() {
            return Err(self.reject(e));
        }

        let name = params.name.clone();
        let created = match self.products.create_product(params).await {
            Ok(id) => self.products.get(id.clone()).await.and_then(|product| {
                product.ok_or_else(|| ProductError::NotFound(id.to_string()))
            }),
            Err(e) => Err(e),
        };
        match created {
            Ok(product) => {
                self.notifier
                    .info("Success", format!("{} has been added.", name));
                Ok(product)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create product");
                self.notifier
                    .error("Error", format!("Failed to save product: {}", e));
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, SessionError> {
        self.require_admin()?;
        if let Err(e) = update.validate() {
            return Err(self.reject(e));
        }

        match self.products.update_product(id, update).await {
            Ok(product) => {
                self.notifier
                    .info("Success", format!("{} has been updated.", product.name));
                Ok(product)
            }
            Err(e) => {
                warn!(error = %e, "Failed to update product");
                self.notifier
                    .error("Error", format!("Failed to save product: {}", e));
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn delete_product(&self, product: &Product) -> Result<(), SessionError> {
        self.require_admin()?;
        match self.products.delete(product.id.clone()).await {
            Ok(()) => {
                self.notifier.info(
                    "Product Deleted",
                    format!("{} has been removed.", product.name),
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete product");
                self.notifier.error("Error", "Failed to delete product.");
                Err(e.into())
            }
        }
    }
}
