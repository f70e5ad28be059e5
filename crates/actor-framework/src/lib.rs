//! # Actor Framework
//!
//! Building blocks for type-safe actor systems on Tokio. Each resource type
//! (a vendor stall, a placed order) lives in its own [`ResourceActor`], which
//! owns the entity store and processes requests one at a time. Callers talk to
//! it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain model and its hooks.
//! 2. **Runtime** ([`ResourceActor`]): message loop and store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed requests.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, served: bool }
//!
//! #[derive(Debug)] struct TicketCreate;
//! #[derive(Debug)] struct TicketUpdate { served: bool }
//! #[derive(Debug)] enum TicketAction { IsServed }
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Action = TicketAction;
//!     type ActionResult = bool;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, served: false })
//!     }
//!
//!     async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), Self::Error> {
//!         self.served = update.served;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<bool, Self::Error> {
//!         match action {
//!             TicketAction::IsServed => Ok(self.served),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut counter = 0;
//!     let (actor, client) = ResourceActor::<Ticket>::new(10, move || {
//!         counter += 1;
//!         counter
//!     });
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(TicketCreate).await.unwrap();
//!     client.update(id, TicketUpdate { served: true }).await.unwrap();
//!     assert!(client.perform_action(id, TicketAction::IsServed).await.unwrap());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)`, not to `new()`. An order actor
//! can therefore be handed the catalog client after both actors exist:
//!
//! ```text
//! let (catalog_actor, catalog_client) = ResourceActor::<Stall>::new(32, ...);
//! let (order_actor, order_client) = ResourceActor::<OrderRecord>::new(32, ...);
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(order_actor.run(catalog_client.clone()));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted
//! expectations, so an actor's dependencies can be faked without spawning them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
