use actor_framework::ActorClient;
use canteen_orders::checkout::{CartSession, CheckoutError};
use canteen_orders::config::CanteenConfig;
use canteen_orders::lifecycle::CanteenSystem;
use canteen_orders::clients::Catalog;
use canteen_orders::model::{
    ItemId, OrderStatus, PaymentDetails, PaymentMethod, PaymentOption, PaymentStatus, Stall,
    VendorFilter, VendorId,
};
use canteen_orders::order_actor::ESTIMATED_PREP_MINUTES;
use chrono::Duration;
use std::time::Duration as StdDuration;

fn fast_config() -> CanteenConfig {
    CanteenConfig {
        payment_delay: StdDuration::from_millis(5),
        ..CanteenConfig::default()
    }
}

/// Full flow with all real actors: browse, cart, pay online, track to pickup.
#[tokio::test(start_paused = true)]
async fn test_online_order_end_to_end() {
    let system = CanteenSystem::new(&fast_config());

    let vendors = system
        .catalog_client
        .vendors(&VendorFilter::default())
        .await
        .expect("Failed to list vendors");
    assert_eq!(vendors.len(), 4);

    let mut session = CartSession::open(&system.catalog_client, &VendorId::from("1"))
        .await
        .expect("Failed to open cart");
    session.add_item(&ItemId::from("1")).unwrap();
    session.add_item(&ItemId::from("1")).unwrap();
    session.add_item(&ItemId::from("4")).unwrap();
    assert_eq!(session.total(), 185);
    assert_eq!(session.item_count(), 3);

    session.update_quantity(&ItemId::from("4"), -1);
    assert_eq!(session.total(), 160);
    session.set_notes("No onions");

    let request = session
        .checkout()
        .unwrap()
        .submit(PaymentDetails::upi(" student@upi "))
        .unwrap();

    let order = system
        .order_client
        .place_order(request)
        .await
        .expect("Failed to place order");

    assert_eq!(order.payment_status, PaymentStatus::Completed);
    assert_eq!(order.payment_option, PaymentOption::Upi);
    assert_eq!(order.upi_id, "student@upi");
    assert_eq!(order.total, 160);
    assert_eq!(order.item_count, 2);
    assert_eq!(order.notes, "No onions");
    assert_eq!(order.status, OrderStatus::Received);
    assert!((1..=999).contains(&order.token.0));
    assert_ne!(order.id.0, order.tracking_id.0);
    assert_eq!(
        order.estimated_time - order.order_time,
        Duration::minutes(ESTIMATED_PREP_MINUTES)
    );

    let stored = system.order_client.order(&order.id).await.unwrap();
    assert_eq!(stored, order);

    let mut tracker = system.track_order(&order);
    let mut seen = vec![tracker.current().status];
    while let Some(update) = tracker.changed().await {
        seen.push(update.status);
    }
    assert_eq!(seen, OrderStatus::FLOW.to_vec());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test(start_paused = true)]
async fn test_cash_order_is_pending() {
    let system = CanteenSystem::new(&fast_config());

    let mut session = CartSession::open(&system.catalog_client, &VendorId::from("4"))
        .await
        .unwrap();
    session.add_item(&ItemId::from("12")).unwrap();
    session.set_payment_method(PaymentMethod::Cash);

    let request = session
        .checkout()
        .unwrap()
        .submit(PaymentDetails::upi("ignored@upi"))
        .unwrap();
    let order = system.order_client.place_order(request).await.unwrap();

    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.payment_option, PaymentOption::Cash);
    assert_eq!(order.upi_id, "");

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_orders_are_listed_oldest_first() {
    let system = CanteenSystem::new(&fast_config());

    let mut placed = Vec::new();
    for item in ["6", "7"] {
        let mut session = CartSession::open(&system.catalog_client, &VendorId::from("2"))
            .await
            .unwrap();
        session.add_item(&ItemId::from(item)).unwrap();
        let request = session
            .checkout()
            .unwrap()
            .submit(PaymentDetails::card())
            .unwrap();
        placed.push(system.order_client.place_order(request).await.unwrap().id);
    }

    let listed: Vec<_> = system
        .order_client
        .orders()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(listed, placed);

    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders.len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_added_stalls_list_after_seeded_ones() {
    let system = CanteenSystem::new(&fast_config());
    let catalog = &system.catalog_client;

    let template = catalog
        .menu(&VendorId::from("4"))
        .await
        .unwrap()
        .expect("seeded menu");
    let mut vendor = catalog
        .vendor(&VendorId::from("4"))
        .await
        .unwrap()
        .expect("seeded vendor");
    for n in 0..6 {
        vendor.name = format!("Pop-up Stall {n}");
        let id = catalog
            .add_stall(Stall {
                vendor: vendor.clone(),
                menu: template.clone(),
            })
            .await
            .expect("Failed to add stall");
        assert_eq!(id, VendorId((5 + n).to_string()));
    }

    let ids: Vec<String> = catalog
        .vendors(&VendorFilter::default())
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.id.0)
        .collect();
    assert_eq!(ids, (1..=10).map(|n| n.to_string()).collect::<Vec<_>>());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_vendor_redirects_home() {
    let system = CanteenSystem::new(&fast_config());

    let err = CartSession::open(&system.catalog_client, &VendorId::from("99"))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckoutError::MissingState(_)));
    assert!(err.is_redirect_home());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_vendor_side_toggles() {
    let system = CanteenSystem::new(&fast_config());
    let catalog = &system.catalog_client;

    let vendor = catalog.set_open(&VendorId::from("3"), true).await.unwrap();
    assert!(vendor.is_open);

    let item = catalog
        .set_item_availability(&VendorId::from("1"), &ItemId::from("3"), true)
        .await
        .unwrap();
    assert!(item.available);

    let mut session = CartSession::open(catalog, &VendorId::from("1")).await.unwrap();
    assert_eq!(session.add_item(&ItemId::from("3")).unwrap(), 1);
    assert_eq!(session.total(), 50);

    let floors = catalog.floors().await.unwrap();
    assert_eq!(floors.len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unavailable_item_cannot_be_added() {
    let system = CanteenSystem::new(&fast_config());

    let mut session = CartSession::open(&system.catalog_client, &VendorId::from("3"))
        .await
        .unwrap();
    let err = session.add_item(&ItemId::from("11")).unwrap_err();
    assert!(matches!(err, CheckoutError::ItemUnavailable(_)));
    assert!(session.cart().is_empty());

    let err = session.checkout().unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));

    system.shutdown().await.unwrap();
}
