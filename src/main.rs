//! Demo: one customer orders from the canteen and waits for pickup.
//!
//! Status steps take 60-90 s by default; shorten them with
//! `CANTEEN_STATUS_DELAY_MIN_SECS` and `CANTEEN_STATUS_DELAY_MAX_SECS`.

use actor_framework::tracing::setup_tracing;
use canteen_orders::checkout::CartSession;
use canteen_orders::config::CanteenConfig;
use canteen_orders::lifecycle::CanteenSystem;
use canteen_orders::model::{ItemId, PaymentDetails, VendorFilter};
use chrono::Utc;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CanteenConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting canteen");
    let system = CanteenSystem::new(&config);

    let vendors = system
        .catalog_client
        .vendors(&VendorFilter::default())
        .await
        .map_err(|e| e.to_string())?;
    for vendor in &vendors {
        info!(
            id = %vendor.id,
            name = %vendor.name,
            floor = %vendor.floor,
            open = vendor.is_open,
            "Vendor"
        );
    }

    let Some(vendor) = vendors.into_iter().find(|v| v.is_open) else {
        warn!("No vendor is open");
        return system.shutdown().await;
    };

    let span = tracing::info_span!("cart", vendor = %vendor.id);
    let request = async {
        let mut session = CartSession::open(&system.catalog_client, &vendor.id)
            .await
            .map_err(|e| e.to_string())?;

        let available: Vec<ItemId> = session
            .menu()
            .items()
            .filter(|item| item.available)
            .map(|item| item.id.clone())
            .take(2)
            .collect();
        for item_id in &available {
            session.add_item(item_id).map_err(|e| e.to_string())?;
        }
        if let Some(first) = available.first() {
            session.update_quantity(first, 1);
        }
        session.set_notes("Less spicy, please");
        info!(total = session.total(), items = session.item_count(), "Cart ready");

        session
            .checkout()
            .and_then(|draft| draft.submit(PaymentDetails::upi("student@upi")))
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    let placed = async {
        info!("Paying and placing order");
        system.order_client.place_order(request).await
    }
    .instrument(span)
    .await;

    let order = match placed {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, redirect_home = e.is_redirect_home(), "Order failed");
            system.shutdown().await?;
            return Err(e.to_string());
        }
    };
    info!(
        order_id = %order.id,
        tracking_id = %order.tracking_id,
        token = %order.token,
        payment = ?order.payment_status,
        eta_min = order.estimated_minutes(Utc::now()),
        "Order confirmed"
    );

    let mut tracker = system.track_order(&order);
    while let Some(update) = tracker.changed().await {
        if let Some(message) = update.status.notification() {
            info!(step = update.status.progress(), "{message}");
        }
        if update.status.is_terminal() {
            break;
        }
    }
    drop(tracker);

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
