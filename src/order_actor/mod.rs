//! # Order Actor
//!
//! Holds every confirmed [`OrderRecord`] in memory. The actor runs with an
//! `Arc<dyn Catalog>` as context and uses it in `on_create` to reject orders
//! for unknown vendors.
//!
//! Order ids look like `ORD1718000000000123`: creation time in epoch
//! milliseconds followed by a random number below 1000. The millisecond part
//! never repeats within one actor, so generated ids are unique.

pub mod entity;
pub mod error;

pub use entity::ESTIMATED_PREP_MINUTES;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::{OrderId, OrderRecord};
use crate::payment::PaymentGateway;
use actor_framework::ResourceActor;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

/// Creates a new order actor and its client.
///
/// `gateway` settles payment on the client side before each create request.
pub fn new(
    buffer_size: usize,
    gateway: Arc<dyn PaymentGateway>,
) -> (ResourceActor<OrderRecord>, OrderClient) {
    let mut last_millis = 0_i64;
    let next_order_id = move || {
        last_millis = Utc::now().timestamp_millis().max(last_millis + 1);
        let suffix: u32 = rand::thread_rng().gen_range(0..1000);
        OrderId(format!("ORD{last_millis}{suffix}"))
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_order_id);
    (actor, OrderClient::new(generic_client, gateway))
}
