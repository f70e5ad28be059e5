use crate::clients::{Catalog, CatalogClient, OrderClient};
use crate::config::CanteenConfig;
use crate::model::OrderRecord;
use crate::payment::SimulatedGateway;
use crate::tracking::{DelayPolicy, StatusTracker};
use crate::{catalog_actor, order_actor};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Running canteen: a seeded catalog actor and an order actor, plus the
/// settings used to simulate payment and status progress.
///
/// # Example
///
/// ```
/// use canteen_orders::config::CanteenConfig;
/// use canteen_orders::lifecycle::CanteenSystem;
/// use canteen_orders::model::VendorFilter;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), String> {
/// let system = CanteenSystem::new(&CanteenConfig::default());
/// let vendors = system
///     .catalog_client
///     .vendors(&VendorFilter::default())
///     .await
///     .map_err(|e| e.to_string())?;
/// assert_eq!(vendors.len(), 4);
///
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct CanteenSystem {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    status_delay: DelayPolicy,
    handles: Vec<JoinHandle<()>>,
}

impl CanteenSystem {
    /// Spawns both actors. Must be called from within a tokio runtime.
    pub fn new(config: &CanteenConfig) -> Self {
        let gateway = Arc::new(SimulatedGateway::new(config.payment_delay));

        let (catalog_actor, catalog_client) = catalog_actor::new(config.actor_buffer);
        let (order_actor, order_client) = order_actor::new(config.actor_buffer, gateway);

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let catalog: Arc<dyn Catalog> = Arc::new(catalog_client.clone());
        let order_handle = tokio::spawn(order_actor.run(catalog));

        info!(
            payment_delay_ms = config.payment_delay.as_millis() as u64,
            "Canteen system started"
        );

        Self {
            catalog_client,
            order_client,
            status_delay: config.status_delay,
            handles: vec![catalog_handle, order_handle],
        }
    }

    /// Starts a status simulation for a placed order.
    pub fn track_order(&self, order: &OrderRecord) -> StatusTracker {
        StatusTracker::start(order.id.clone(), order.status, self.status_delay)
    }

    /// Drops the clients and waits for both actors to exit.
    ///
    /// The order actor holds a catalog client as context, so the catalog
    /// actor only stops after the order actor has.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down canteen system...");
        drop(self.order_client);
        drop(self.catalog_client);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Canteen system shutdown complete.");
        Ok(())
    }
}
