//! # Canteen Orders
//!
//! Ordering core for a cafeteria: browse vendors, fill a cart, pick a
//! payment method, place the order and follow its status until pickup.
//! Everything lives in memory. Payment is a timed stub.
//!
//! Built on the resource-actor pattern from the `actor-framework` crate:
//! each actor owns its entities, runs in its own Tokio task and handles one
//! message at a time.
//!
//! ## Module Tour
//!
//! - [`model`] - vendors, menus, carts and orders. Plain data, `serde` ready.
//! - [`catalog_actor`] - holds the vendor stalls, seeded from fixtures.
//! - [`order_actor`] - holds placed orders and validates them against the catalog.
//! - [`clients`] - typed wrappers: [`CatalogClient`](clients::CatalogClient),
//!   [`OrderClient`](clients::OrderClient) and the [`Catalog`](clients::Catalog) seam.
//! - [`checkout`] - the cart → draft → payment request pipeline.
//! - [`payment`] - the [`PaymentGateway`](payment::PaymentGateway) trait and its simulated implementation.
//! - [`tracking`] - [`StatusTracker`](tracking::StatusTracker), the order status simulation.
//! - [`config`] - environment-driven settings.
//! - [`lifecycle`] - [`CanteenSystem`](lifecycle::CanteenSystem) starts and stops the actors.
//!
//! ## Running the Demo
//!
//! ```bash
//! CANTEEN_STATUS_DELAY_MIN_SECS=1 CANTEEN_STATUS_DELAY_MAX_SECS=2 RUST_LOG=info cargo run
//! ```

pub mod catalog_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment;
pub mod tracking;
