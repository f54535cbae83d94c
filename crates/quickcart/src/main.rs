use docstore::tracing::setup_tracing;
use quickcart::config::ShopConfig;
use quickcart::identity::InMemoryIdentity;
use quickcart::lifecycle::{seed_catalog, ShopSystem};
use quickcart::model::{Location, ProductCreate, UserUpdate};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = ShopConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting QuickCart");

    let system = ShopSystem::new(&config);
    if config.seed_catalog {
        seed_catalog(&system.product_client)
            .await
            .map_err(|e| e.to_string())?;
    }

    let identity = Arc::new(InMemoryIdentity::new());
    let mut session = system.session(identity);

    let span = tracing::info_span!("registration");
    async {
        session
            .register(
                "ana@example.com",
                SecretString::from("correct-horse".to_string()),
                "Ana",
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Promote the demo user so it can manage the catalog.
    let uid = session
        .current_user()
        .map(|user| user.id.clone())
        .ok_or("registration did not sign in")?;
    system
        .user_client
        .update_user(
            uid,
            UserUpdate {
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    session.refresh().await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog");
    async {
        session
            .create_product(ProductCreate {
                name: "Oat Milk".to_string(),
                serial_number: "DAI-022".to_string(),
                category: "Dairy".to_string(),
                price: 3.29,
                quantity: 48,
                image: None,
                location: Location::new(0, 4, 1),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("shopping");
    async {
        session
            .create_list("Weekly groceries")
            .await
            .map_err(|e| e.to_string())?;

        for (query, quantity) in [("milk", 2), ("bread", 1), ("water", 6), ("peas", 1)] {
            let found = session.suggest_products(query).await;
            info!(query, found = found.len(), "Suggestions");
            if let Some(product) = found.first() {
                session
                    .add_item_to_current_list(product, quantity)
                    .map_err(|e| e.to_string())?;
            }
        }

        let route = session.optimize_route().map_err(|e| e.to_string())?;
        for (step, item) in route.iter().enumerate() {
            info!(
                step = step + 1,
                product = %item.product.name,
                quantity = item.quantity,
                location = %item.product.location,
                "Route"
            );
        }

        let saved = session
            .save_current_list()
            .await
            .map_err(|e| e.to_string())?;
        info!(
            list = %saved.name,
            items = saved.total_items(),
            total = saved.total_price(),
            "List saved"
        );
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    session.logout().await.map_err(|e| e.to_string())?;
    drop(session);

    system.shutdown().await?;
    info!("QuickCart demo completed");
    Ok(())
}
