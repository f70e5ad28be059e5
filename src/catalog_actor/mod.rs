//! # Catalog Actor
//!
//! Owns every [`Stall`] (vendor plus menu), seeded from [`fixtures`] at start.
//! Customers only read from it; vendor-side toggles go through
//! [`CatalogClient::set_open`] and [`CatalogClient::set_item_availability`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Stall`]
//! - [`error`] - [`CatalogError`]
//! - [`actions`] - [`StallAction`] and [`StallActionResult`]
//! - [`fixtures`] - seed data
//!
//! ## Usage
//!
//! ```rust
//! use canteen_orders::catalog_actor;
//! use canteen_orders::clients::Catalog;
//! use canteen_orders::model::{VendorFilter, VendorId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let ground = client.vendors(&VendorFilter::default().floor("Ground Floor")).await?;
//!     assert_eq!(ground.len(), 2);
//!
//!     let menu = client.menu(&VendorId::from("2")).await?.expect("seeded vendor");
//!     assert_eq!(menu.items().count(), 3);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod fixtures;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::{Stall, VendorId};
use actor_framework::ResourceActor;

/// Creates the catalog actor, seeded with the fixture stalls, and its client.
///
/// Stalls created later get numeric ids continuing after the fixtures.
pub fn new(buffer_size: usize) -> (ResourceActor<Stall>, CatalogClient) {
    let seeded: Vec<(VendorId, Stall)> = fixtures::seed().collect();
    let mut next = seeded
        .iter()
        .filter_map(|(id, _)| id.0.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let next_vendor_id = move || {
        next += 1;
        VendorId(next.to_string())
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_vendor_id);
    (actor.seed(seeded), CatalogClient::new(generic_client))
}
