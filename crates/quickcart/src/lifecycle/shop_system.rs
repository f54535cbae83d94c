use crate::clients::{ListClient, ProductClient, UserClient};
use crate::config::ShopConfig;
use crate::identity::IdentityProvider;
use crate::session::{Notifier, ShopSession};
use crate::{list_actor, product_actor, user_actor};
use std::sync::Arc;
use tracing::{error, info};

/// The running collections of the shop and their clients.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(&ShopConfig::default());
/// let mut session = system.session(identity);
/// session.login("ana@example.com", password).await?;
///
/// drop(session);
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub list_client: ListClient,
    notifier: Notifier,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts the product, user and list collections. Must be called inside a
    /// Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let (product_actor, product_client) = product_actor::new(config.buffer_size);
        let (user_actor, user_client) = user_actor::new(config.buffer_size);
        let (list_actor, list_client) = list_actor::new(config.buffer_size);

        let product_handle = tokio::spawn(product_actor.run(()));
        let user_handle = tokio::spawn(user_actor.run(()));
        // Lists check their owner against the user collection.
        let list_handle = tokio::spawn(list_actor.run(user_client.clone()));

        info!(buffer_size = config.buffer_size, "Shop system started");
        Self {
            product_client,
            user_client,
            list_client,
            notifier: Notifier::new(config.notification_capacity),
            handles: vec![product_handle, user_handle, list_handle],
        }
    }

    /// A session bound to `identity`. Sessions share the system's notifier.
    pub fn session(&self, identity: Arc<dyn IdentityProvider>) -> ShopSession {
        ShopSession::new(
            identity,
            self.product_client.clone(),
            self.user_client.clone(),
            self.list_client.clone(),
            self.notifier.clone(),
        )
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Drops the clients and waits for every collection task to finish.
    ///
    /// Returns an error if a collection task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system...");

        drop(self.list_client);
        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {:?}", e);
                return Err(format!("Collection task failed: {:?}", e));
            }
        }

        info!("Shop system shutdown complete.");
        Ok(())
    }
}
