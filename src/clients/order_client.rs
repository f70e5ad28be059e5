//! # Order Client
//!
//! Wraps a `ResourceClient<OrderRecord>` and runs the last checkout step:
//! settle payment, then create the order in the actor.
use crate::checkout::PaymentRequest;
use crate::model::{OrderId, OrderRecord};
use crate::order_actor::OrderError;
use crate::payment::PaymentGateway;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
///
/// Payment runs here, before the create request is sent, so a slow gateway
/// never holds up the actor's queue.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<OrderRecord>,
    gateway: Arc<dyn PaymentGateway>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<OrderRecord>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { inner, gateway }
    }

    /// Pays for a submitted checkout and stores the confirmed order.
    #[instrument(skip(self, request), fields(vendor = %request.vendor_id(), total = request.total()))]
    pub async fn place_order(&self, request: PaymentRequest) -> Result<OrderRecord, OrderError> {
        debug!("Authorizing payment");
        let payment_status = self.gateway.authorize(&request).await?;

        let id = self
            .inner
            .create(request.into_order_create(payment_status))
            .await
            .map_err(Self::map_error)?;

        let record = self
            .get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        info!(order_id = %record.id, token = %record.token, "Order placed");
        Ok(record)
    }

    /// All placed orders, oldest first.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<OrderRecord>, OrderError> {
        let mut orders = self.list().await?;
        orders.sort_by(|a, b| a.order_time.cmp(&b.order_time).then_with(|| a.id.cmp(&b.id)));
        Ok(orders)
    }

    /// Looks an order up by its id.
    pub async fn order(&self, id: &OrderId) -> Result<OrderRecord, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<OrderRecord> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<OrderRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<OrderError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
