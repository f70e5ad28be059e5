//! # System Lifecycle
//!
//! Starts the actors, wires them together and shuts them down.
//!
//! The order actor depends on the catalog. It receives a
//! `CatalogClient` as its run-time context rather than at construction, so
//! both actors can be created first and connected afterwards:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog_client) = catalog_actor::new(buffer);
//! let (order_actor, order_client) = order_actor::new(buffer, gateway);
//!
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(order_actor.run(Arc::new(catalog_client.clone()) as Arc<dyn Catalog>));
//! ```
//!
//! Shutdown drops every client. Each actor sees its channel close, leaves its
//! loop, and [`CanteenSystem::shutdown`] joins the tasks.

mod canteen_system;

pub use canteen_system::CanteenSystem;
