//! [`ActorEntity`] implementation for [`OrderRecord`].
//!
//! Creation stamps the tracking id, pickup token and timestamps; `on_create`
//! then checks the vendor against the catalog handed in as context. Placed
//! orders are immutable, so updates and actions are no-ops.

use super::error::OrderError;
use crate::clients::Catalog;
use crate::model::{OrderCreate, OrderId, OrderRecord, OrderStatus, Token, TrackingId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// Minutes from placing an order to its estimated ready time.
pub const ESTIMATED_PREP_MINUTES: i64 = 15;

#[async_trait]
impl ActorEntity for OrderRecord {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = Arc<dyn Catalog>;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let order_time = Utc::now();
        let mut rng = rand::thread_rng();
        let tracking_id = TrackingId(format!(
            "TRK{}{}",
            order_time.timestamp_millis(),
            rng.gen_range(0..1000)
        ));
        let token = Token(rng.gen_range(1..=999));

        Ok(Self {
            id,
            tracking_id,
            token,
            vendor_id: params.vendor_id,
            vendor: params.vendor,
            cart: params.cart,
            notes: params.notes,
            payment_method: params.payment_method,
            total: params.total,
            item_count: params.item_count,
            payment_status: params.payment_status,
            payment_option: params.payment_option,
            upi_id: params.upi_id,
            order_time,
            estimated_time: order_time + Duration::minutes(ESTIMATED_PREP_MINUTES),
            status: OrderStatus::Received,
        })
    }

    /// Rejects orders for vendors the catalog does not know and refreshes the
    /// vendor snapshot. A closed vendor is accepted.
    async fn on_create(&mut self, catalog: &Self::Context) -> Result<(), Self::Error> {
        debug!(order_id = %self.id, vendor = %self.vendor_id, "Validating vendor");
        let vendor = catalog
            .vendor(&self.vendor_id)
            .await
            .map_err(|e| OrderError::Catalog(e.to_string()))?
            .ok_or_else(|| OrderError::UnknownVendor(self.vendor_id.to_string()))?;
        if !vendor.is_open {
            warn!(order_id = %self.id, vendor = %vendor.name, "Order placed with a closed vendor");
        }
        self.vendor = vendor;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
