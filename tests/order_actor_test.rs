use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use canteen_orders::catalog_actor::{fixtures, CatalogError};
use canteen_orders::checkout::{CartSession, PaymentRequest};
use canteen_orders::clients::{Catalog, CatalogClient, OrderClient};
use canteen_orders::model::{ItemId, PaymentDetails, Stall, VendorId};
use canteen_orders::order_actor::{self, OrderError};
use canteen_orders::payment::SimulatedGateway;
use std::sync::Arc;
use std::time::Duration;

fn stall(id: &str) -> Stall {
    fixtures::stalls()
        .into_iter()
        .find(|s| s.vendor.id == VendorId::from(id))
        .expect("fixture stall")
}

fn request(stall: Stall, item: &str) -> PaymentRequest {
    let mut session = CartSession::new(stall.vendor, stall.menu);
    session.add_item(&ItemId::from(item)).unwrap();
    session
        .checkout()
        .unwrap()
        .submit(PaymentDetails::wallet())
        .unwrap()
}

fn spawn_order_actor(catalog: CatalogClient) -> (OrderClient, tokio::task::JoinHandle<()>) {
    let gateway = Arc::new(SimulatedGateway::new(Duration::ZERO));
    let (actor, client) = order_actor::new(10, gateway);
    let context: Arc<dyn Catalog> = Arc::new(catalog);
    (client, tokio::spawn(actor.run(context)))
}

/// Real order actor, mocked catalog: `on_create` must look the vendor up.
#[tokio::test]
async fn test_order_actor_validates_vendor_with_mocked_catalog() {
    let mut catalog_mock = MockClient::<Stall>::new();

    let mut current = stall("2");
    current.vendor.rating = 4.9;
    catalog_mock
        .expect_get(VendorId::from("2"))
        .return_ok(Some(current));

    let (order_client, handle) = spawn_order_actor(CatalogClient::new(catalog_mock.client()));

    let order = order_client
        .place_order(request(stall("2"), "7"))
        .await
        .expect("Order creation failed");

    // snapshot is refreshed from the catalog at creation
    assert_eq!(order.vendor.rating, 4.9);
    assert_eq!(order.total, 90);

    let retrieved = order_client.get(order.id.clone()).await.unwrap();
    assert_eq!(retrieved, Some(order));

    catalog_mock.verify();

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_vendor_is_rejected() {
    let mut catalog_mock = MockClient::<Stall>::new();
    catalog_mock.expect_get(VendorId::from("1")).return_ok(None);

    let (order_client, handle) = spawn_order_actor(CatalogClient::new(catalog_mock.client()));

    let err = order_client
        .place_order(request(stall("1"), "2"))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::UnknownVendor("vendor_1".to_string()));
    assert!(err.is_redirect_home());

    assert!(order_client.orders().await.unwrap().is_empty());

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_catalog_failure_is_reported() {
    let mut catalog_mock = MockClient::<Stall>::new();
    catalog_mock
        .expect_get(VendorId::from("4"))
        .return_err(FrameworkError::ActorClosed);

    let (order_client, handle) = spawn_order_actor(CatalogClient::new(catalog_mock.client()));

    let err = order_client
        .place_order(request(stall("4"), "13"))
        .await
        .unwrap_err();
    let expected = CatalogError::ActorCommunicationError(FrameworkError::ActorClosed.to_string());
    assert_eq!(err, OrderError::Catalog(expected.to_string()));

    drop(order_client);
    handle.await.unwrap();
}

/// A closed vendor still accepts orders.
#[tokio::test]
async fn test_closed_vendor_still_accepts_orders() {
    let mut catalog_mock = MockClient::<Stall>::new();
    let closed = stall("3");
    assert!(!closed.vendor.is_open);
    catalog_mock
        .expect_get(VendorId::from("3"))
        .return_ok(Some(closed.clone()));

    let (order_client, handle) = spawn_order_actor(CatalogClient::new(catalog_mock.client()));

    let order = order_client.place_order(request(closed, "9")).await.unwrap();
    assert!(!order.vendor.is_open);

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let catalog_mock = MockClient::<Stall>::new();
    let (order_client, handle) = spawn_order_actor(CatalogClient::new(catalog_mock.client()));

    let missing = canteen_orders::model::OrderId("ORD0".to_string());
    let err = order_client.order(&missing).await.unwrap_err();
    assert_eq!(err, OrderError::NotFound("ORD0".to_string()));

    drop(order_client);
    handle.await.unwrap();
}
