use docstore::mock::MockStore;
use docstore::{CollectionClient, StoreError};
use quickcart::clients::{ListClient, ProductClient, UserClient};
use quickcart::config::ShopConfig;
use quickcart::identity::{IdentityError, IdentityProvider, InMemoryIdentity};
use quickcart::lifecycle::ShopSystem;
use quickcart::list_actor::ListError;
use quickcart::model::{
    Location, Product, ProductCreate, ProductId, ProductUpdate, ShoppingList, ShoppingListUpdate,
    User, UserCreate, UserId, UserUpdate, ValidationError,
};
use quickcart::session::{Notification, Notifier, SessionError, ShopSession, Variant};
use secrecy::SecretString;
use std::sync::Arc;
use tokio::sync::broadcast;

// --- Helpers ---

fn config() -> ShopConfig {
    ShopConfig {
        buffer_size: 16,
        notification_capacity: 64,
        seed_catalog: false,
    }
}

fn password() -> SecretString {
    SecretString::from("hunter22".to_string())
}

fn drain(receiver: &mut broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut seen = Vec::new();
    while let Ok(notification) = receiver.try_recv() {
        seen.push(notification);
    }
    seen
}

fn titles(notifications: &[Notification]) -> Vec<&str> {
    notifications.iter().map(|n| n.title.as_str()).collect()
}

fn product_params(name: &str, category: &str, location: (i32, i32, i32)) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        serial_number: format!("SN-{}", name.len()),
        category: category.to_string(),
        price: 2.0,
        quantity: 10,
        image: None,
        location: Location::new(location.0, location.1, location.2),
    }
}

async fn add_product(system: &ShopSystem, params: ProductCreate) -> Product {
    let id = system
        .product_client
        .create_product(params)
        .await
        .unwrap();
    system.product_client.get(id).await.unwrap().unwrap()
}

async fn signed_in(system: &ShopSystem) -> (ShopSession, Arc<InMemoryIdentity>) {
    let identity = Arc::new(InMemoryIdentity::new());
    let mut session = system.session(identity.clone());
    session
        .register("ana@example.com", password(), "Ana")
        .await
        .unwrap();
    (session, identity)
}

async fn promote(system: &ShopSystem, session: &mut ShopSession) {
    let uid = session.current_user().unwrap().id.clone();
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
        .unwrap();
    session.refresh().await.unwrap();
}

// --- Authentication ---

#[tokio::test]
async fn test_register_creates_non_admin_profile() {
    let system = ShopSystem::new(&config());
    let identity = Arc::new(InMemoryIdentity::new());
    let mut session = system.session(identity);
    let mut notes = session.notifications();

    session
        .register("ana@example.com", password(), "Ana")
        .await
        .unwrap();

    let user = session.current_user().unwrap().clone();
    assert_eq!(user.name, "Ana");
    assert!(!user.is_admin);

    let stored: Option<User> = system.user_client.get(user.id.clone()).await.unwrap();
    assert_eq!(stored, Some(user));

    let seen = drain(&mut notes);
    assert_eq!(seen[0].title, "Registration Successful");
    assert_eq!(seen[0].description, "Welcome to QuickCart, Ana!");
    assert!(session.lists().is_empty());
}

#[tokio::test]
async fn test_failed_login_reports_and_keeps_signed_out() {
    let system = ShopSystem::new(&config());
    let identity = Arc::new(InMemoryIdentity::new());
    identity
        .sign_up("bo@example.com", password(), "Bo")
        .await
        .unwrap();
    identity.sign_out().await.unwrap();

    let mut session = system.session(identity);
    let mut notes = session.notifications();

    let result = session
        .login("bo@example.com", SecretString::from("wrong-one".to_string()))
        .await;
    assert_eq!(
        result,
        Err(SessionError::Identity(IdentityError::InvalidCredentials))
    );
    assert!(session.current_user().is_none());

    let seen = drain(&mut notes);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title, "Login Failed");
    assert_eq!(seen[0].variant, Variant::Destructive);

    session.login("bo@example.com", password()).await.unwrap();
    assert_eq!(titles(&drain(&mut notes)), vec!["Login Successful"]);
}

#[tokio::test]
async fn test_session_without_profile_gets_one() {
    let system = ShopSystem::new(&config());
    let identity = Arc::new(InMemoryIdentity::new());
    let auth = identity
        .sign_up("cy@example.com", password(), "Cy")
        .await
        .unwrap();

    let mut session = system.session(identity);
    session.refresh().await.unwrap();

    let user = session.current_user().unwrap();
    assert_eq!(user.id, auth.uid);
    assert_eq!(user.name, "Cy");
    assert!(!user.is_admin);
    assert!(system.user_client.get(auth.uid).await.unwrap().is_some());
}

#[tokio::test]
async fn test_failed_profile_write_signs_the_new_account_out() {
    let system = ShopSystem::new(&config());
    system
        .user_client
        .create_profile(
            UserId::from("uid_1"),
            UserCreate {
                email: "old@example.com".to_string(),
                name: "Old".to_string(),
                is_admin: false,
            },
        )
        .await
        .unwrap();

    let identity = Arc::new(InMemoryIdentity::new());
    let mut session = system.session(identity.clone());
    let mut notes = session.notifications();

    let result = session.register("ana@example.com", password(), "Ana").await;
    assert!(matches!(result, Err(SessionError::User(_))));
    assert!(session.current_user().is_none());
    assert!(identity.session().borrow().is_none());

    let seen = drain(&mut notes);
    assert_eq!(titles(&seen), vec!["Registration Failed"]);
}

#[tokio::test]
async fn test_logout_clears_session_state() {
    let system = ShopSystem::new(&config());
    let (mut session, identity) = signed_in(&system).await;
    session.create_list("Weekly").await.unwrap();
    assert_eq!(session.lists().len(), 1);

    session.logout().await.unwrap();
    assert!(session.current_user().is_none());
    assert!(session.current_list().is_none());
    assert!(session.lists().is_empty());
    assert!(identity.session().borrow().is_none());

    assert_eq!(
        session.create_list("Another").await,
        Err(SessionError::NotSignedIn)
    );
}

// --- Lists ---

#[tokio::test]
async fn test_create_list_opens_it_and_feeds_all_lists() {
    let system = ShopSystem::new(&config());
    let (mut session, _identity) = signed_in(&system).await;
    let mut notes = session.notifications();

    let list = session.create_list("Weekly").await.unwrap();
    assert_eq!(session.current_list(), Some(&list));
    assert_eq!(session.lists().len(), 1);
    assert_eq!(
        session.current_user().map(|u| &u.id),
        Some(&list.user_id)
    );

    let seen = drain(&mut notes);
    assert_eq!(seen[0].title, "List Created");
    assert_eq!(seen[0].description, "Shopping list \"Weekly\" has been created.");

    let blank = session.create_list("   ").await;
    assert!(matches!(blank, Err(SessionError::Validation(_))));
    assert_eq!(session.lists().len(), 1);
    assert_eq!(titles(&drain(&mut notes)), vec!["Validation Error"]);
}

#[tokio::test]
async fn test_item_operations_edit_the_current_list_locally() {
    let system = ShopSystem::new(&config());
    let milk = add_product(&system, product_params("Whole Milk", "Dairy", (0, 4, 2))).await;
    let bread = add_product(&system, product_params("Bread", "Bakery", (0, 1, 1))).await;
    let (mut session, _identity) = signed_in(&system).await;

    assert_eq!(
        session.add_item_to_current_list(&milk, 1),
        Err(SessionError::NoCurrentList)
    );

    let list = session.create_list("Weekly").await.unwrap();
    session.add_item_to_current_list(&milk, 2).unwrap();
    session.add_item_to_current_list(&milk, 3).unwrap();
    session.add_item_to_current_list(&bread, 1).unwrap();

    let current = session.current_list().unwrap();
    assert_eq!(current.items.len(), 2);
    assert_eq!(current.item(&milk.id).unwrap().quantity, 5);

    assert_eq!(
        session.add_item_to_current_list(&bread, 0),
        Err(SessionError::Validation(ValidationError::InvalidQuantity(0)))
    );

    let before = session.current_list().unwrap().items.clone();
    session
        .remove_item_from_current_list(&ProductId(99))
        .unwrap();
    assert_eq!(session.current_list().unwrap().items, before);

    session.update_item_quantity(&bread.id, 0).unwrap();
    assert_eq!(session.current_list().unwrap().item(&bread.id).unwrap().quantity, 0);
    session.update_item_quantity(&bread.id, -1).unwrap();
    assert_eq!(session.current_list().unwrap().item(&bread.id).unwrap().quantity, -1);

    // Nothing reaches the collection before a save.
    let stored = system.list_client.get(list.id.clone()).await.unwrap().unwrap();
    assert!(stored.items.is_empty());

    let saved = session.save_current_list().await.unwrap();
    assert_eq!(saved.items.len(), 2);
    let stored = system.list_client.get(list.id).await.unwrap().unwrap();
    assert_eq!(stored.items, saved.items);
    assert_eq!(session.current_list(), Some(&saved));
}

#[tokio::test]
async fn test_optimized_route_walks_floor_aisle_row() {
    let system = ShopSystem::new(&config());
    let a = add_product(&system, product_params("Rice", "Pantry", (1, 3, 2))).await;
    let b = add_product(&system, product_params("Water", "Drinks", (0, 9, 1))).await;
    let c = add_product(&system, product_params("Soap", "Household", (1, 1, 5))).await;
    let (mut session, _identity) = signed_in(&system).await;

    assert_eq!(session.optimize_route(), Err(SessionError::NoCurrentList));

    session.create_list("Errands").await.unwrap();
    for product in [&a, &b, &c] {
        session.add_item_to_current_list(product, 1).unwrap();
    }
    let mut notes = session.notifications();

    let route = session.optimize_route().unwrap();
    let stops: Vec<(i32, i32, i32)> = route
        .iter()
        .map(|item| {
            let l = item.product.location;
            (l.floor, l.aisle, l.row)
        })
        .collect();
    assert_eq!(stops, vec![(0, 9, 1), (1, 1, 5), (1, 3, 2)]);

    // The list keeps the order items were added in.
    let order: Vec<&ProductId> = session
        .current_list()
        .unwrap()
        .items
        .iter()
        .map(|item| &item.product.id)
        .collect();
    assert_eq!(order, vec![&a.id, &b.id, &c.id]);
    assert_eq!(titles(&drain(&mut notes)), vec!["Route Optimized"]);
}

#[tokio::test]
async fn test_remote_changes_update_lists_but_not_current_list() {
    let system = ShopSystem::new(&config());
    let milk = add_product(&system, product_params("Milk", "Dairy", (0, 1, 1))).await;
    let (mut session, _identity) = signed_in(&system).await;

    let list = session.create_list("Weekly").await.unwrap();
    session.add_item_to_current_list(&milk, 1).unwrap();

    // Another device renames the list.
    system
        .list_client
        .update_list(
            list.id.clone(),
            ShoppingListUpdate {
                name: Some("Renamed elsewhere".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let snapshot = session.lists_changed().await.unwrap();
    assert_eq!(snapshot[0].name, "Renamed elsewhere");
    assert_eq!(session.lists()[0].name, "Renamed elsewhere");

    let current = session.current_list().unwrap();
    assert_eq!(current.name, "Weekly");
    assert_eq!(current.items.len(), 1);

    // Saving writes the local edit over the remote one.
    let saved = session.save_current_list().await.unwrap();
    assert_eq!(saved.name, "Weekly");
    let snapshot = session.lists_changed().await.unwrap();
    assert_eq!(snapshot[0].name, "Weekly");
    assert_eq!(snapshot[0].items.len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_list() {
    let system = ShopSystem::new(&config());
    let (mut session, _identity) = signed_in(&system).await;
    let mut list = session.create_list("Weekly").await.unwrap();
    let other = session.create_list("Party").await.unwrap();
    session.set_current_list(Some(list.clone()));
    let mut notes = session.notifications();

    list.rename("Weekly shop");
    let updated = session.update_list(&list).await.unwrap();
    assert_eq!(session.current_list().unwrap().name, "Weekly shop");
    assert_eq!(updated.name, "Weekly shop");

    session.delete_list(&other.id).await.unwrap();
    assert_eq!(session.current_list().map(|l| &l.id), Some(&list.id));

    session.delete_list(&list.id).await.unwrap();
    assert!(session.current_list().is_none());
    assert!(session.lists().is_empty());

    let seen = drain(&mut notes);
    assert_eq!(titles(&seen), vec!["List Updated", "List Deleted", "List Deleted"]);
    assert_eq!(seen[1].description, "Shopping list \"Party\" has been deleted.");
}

#[tokio::test]
async fn test_failed_save_keeps_local_list_and_notifies() {
    let system = ShopSystem::new(&config());
    let milk = add_product(&system, product_params("Milk", "Dairy", (0, 1, 1))).await;
    let (mut session, _identity) = signed_in(&system).await;

    let list = session.create_list("Weekly").await.unwrap();
    session.add_item_to_current_list(&milk, 2).unwrap();
    system.list_client.delete(list.id.clone()).await.unwrap();

    let mut notes = session.notifications();
    let local = session.current_list().unwrap().clone();

    let result = session.save_current_list().await;
    assert_eq!(
        result,
        Err(SessionError::List(ListError::NotFound(list.id.to_string())))
    );
    assert_eq!(session.current_list(), Some(&local));

    let seen = drain(&mut notes);
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].description, "Failed to save shopping list.");
    assert_eq!(seen[0].variant, Variant::Destructive);
}

#[tokio::test]
async fn test_lists_of_other_users_cannot_be_changed() {
    let system = ShopSystem::new(&config());
    let (mut ana, identity) = signed_in(&system).await;
    let ana_list = ana.create_list("Ana private").await.unwrap();

    let mut bob = system.session(identity.clone());
    bob.register("bob@example.com", password(), "Bob")
        .await
        .unwrap();
    let mut notes = bob.notifications();

    // Claiming the list on the local copy does not help.
    let mut taken = ana_list.clone();
    taken.rename("Bob's now");
    taken.user_id = bob.current_user().unwrap().id.clone();

    let denied = Err(SessionError::NotOwner(ana_list.id.clone()));
    assert_eq!(bob.update_list(&taken).await, denied);
    assert_eq!(bob.delete_list(&ana_list.id).await, Err(SessionError::NotOwner(ana_list.id.clone())));

    bob.set_current_list(Some(taken.clone()));
    assert_eq!(bob.save_current_list().await, denied);
    assert_eq!(bob.current_list(), Some(&taken));

    let stored = system.list_client.get(ana_list.id.clone()).await.unwrap();
    assert_eq!(stored, Some(ana_list));

    let seen = drain(&mut notes);
    assert_eq!(titles(&seen), vec!["Access Denied"; 3]);
    assert!(seen.iter().all(|n| n.variant == Variant::Destructive));
}

// --- Suggestions ---

#[tokio::test]
async fn test_suggestions() {
    let system = ShopSystem::new(&config());
    add_product(&system, product_params("Whole Milk", "Dairy", (0, 4, 2))).await;
    add_product(&system, product_params("Bread", "Bakery", (0, 1, 1))).await;
    for i in 0..6 {
        add_product(&system, product_params(&format!("Yogurt {}", i), "Dairy", (0, 4, 3))).await;
    }
    let (session, _identity) = signed_in(&system).await;

    assert!(session.suggest_products("").await.is_empty());
    assert!(session.suggest_products("   ").await.is_empty());

    let milk = session.suggest_products("milk").await;
    assert_eq!(milk.len(), 1);
    assert_eq!(milk[0].name, "Whole Milk");

    // Category matches too, capped at five.
    assert_eq!(session.suggest_products("DAIRY").await.len(), 5);
    assert!(session.suggest_products("caviar").await.is_empty());
}

#[tokio::test]
async fn test_suggestion_failure_yields_nothing_and_notifies() {
    let mut catalog = MockStore::<Product>::new();
    catalog.expect_list().return_err(StoreError::ActorClosed);
    let users = MockStore::<User>::new();
    let lists = MockStore::<ShoppingList>::new();

    let session = ShopSession::new(
        Arc::new(InMemoryIdentity::new()),
        ProductClient::new(catalog.client()),
        UserClient::new(users.client()),
        ListClient::new(lists.client()),
        Notifier::new(8),
    );
    let mut notes = session.notifications();

    assert!(session.suggest_products("milk").await.is_empty());
    let seen = drain(&mut notes);
    assert_eq!(seen[0].description, "Failed to search for products.");
    catalog.verify();
}

// --- Catalog management ---

#[tokio::test]
async fn test_catalog_management_requires_admin() {
    let system = ShopSystem::new(&config());
    let (mut session, _identity) = signed_in(&system).await;
    let mut notes = session.notifications();

    let denied = session
        .create_product(product_params("Tea", "Drinks", (0, 2, 2)))
        .await;
    assert_eq!(denied, Err(SessionError::NotAuthorized));
    assert_eq!(session.list_products().await, Err(SessionError::NotAuthorized));
    assert_eq!(titles(&drain(&mut notes)), vec!["Access Denied", "Access Denied"]);
    assert!(system.product_client.list_products().await.unwrap().is_empty());

    promote(&system, &mut session).await;
    assert!(session.current_user().unwrap().is_admin);

    let tea = session
        .create_product(product_params("Tea", "Drinks", (0, 2, 2)))
        .await
        .unwrap();
    assert_eq!(tea.image, "/placeholder.svg");

    let updated = session
        .update_product(
            tea.id.clone(),
            ProductUpdate {
                price: Some(3.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 3.5);
    assert_eq!(session.list_products().await.unwrap(), vec![updated.clone()]);

    session.delete_product(&updated).await.unwrap();
    assert!(session.list_products().await.unwrap().is_empty());

    let seen = drain(&mut notes);
    assert_eq!(titles(&seen), vec!["Success", "Success", "Product Deleted"]);
    assert_eq!(seen[0].description, "Tea has been added.");
    assert_eq!(seen[2].description, "Tea has been removed.");
}

#[tokio::test]
async fn test_invalid_product_never_reaches_the_catalog() {
    let system = ShopSystem::new(&config());
    let (mut session, _identity) = signed_in(&system).await;
    promote(&system, &mut session).await;

    let mut params = product_params("Tea", "Drinks", (0, 2, 2));
    params.serial_number = String::new();
    let result = session.create_product(params).await;
    assert_eq!(
        result,
        Err(SessionError::Validation(ValidationError::Required(
            "serial number"
        )))
    );
    assert!(system.product_client.list_products().await.unwrap().is_empty());
}

// --- Lifecycle ---

#[tokio::test]
async fn test_shutdown_after_sessions_are_dropped() {
    let system = ShopSystem::new(&config());
    let (session, _identity) = signed_in(&system).await;
    drop(session);

    system.shutdown().await.unwrap();
}
