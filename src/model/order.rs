//! Placed orders, payment types and the order status lifecycle.
//!
//! # Actor Framework
//! [`OrderRecord`] implements [`ActorEntity`](actor_framework::ActorEntity)
//! in [`order_actor`](crate::order_actor). See there for how ids, tracking id
//! and token are generated from an [`OrderCreate`].
use crate::model::{Cart, Vendor, VendorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders, `ORD` followed by digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Secondary lookup id, `TRK` followed by digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(pub String);

impl Display for TrackingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pickup token shown to the customer, 1 to 999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub u16);

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Online,
    Cash,
}

/// The ways to pay online.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineOption {
    #[default]
    Upi,
    Card,
    Wallet,
}

/// Payment option as recorded on a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOption {
    Upi,
    Card,
    Wallet,
    Cash,
}

impl From<OnlineOption> for PaymentOption {
    fn from(option: OnlineOption) -> Self {
        match option {
            OnlineOption::Upi => PaymentOption::Upi,
            OnlineOption::Card => PaymentOption::Card,
            OnlineOption::Wallet => PaymentOption::Wallet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
}

/// What the customer entered on the payment step. Ignored for cash orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub option: OnlineOption,
    pub upi_id: String,
}

impl PaymentDetails {
    pub fn upi(upi_id: impl Into<String>) -> Self {
        Self {
            option: OnlineOption::Upi,
            upi_id: upi_id.into(),
        }
    }

    pub fn card() -> Self {
        Self {
            option: OnlineOption::Card,
            upi_id: String::new(),
        }
    }

    pub fn wallet() -> Self {
        Self {
            option: OnlineOption::Wallet,
            upi_id: String::new(),
        }
    }
}

/// Lifecycle of a placed order. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Received,
    Preparing,
    Ready,
    PickedUp,
}

impl OrderStatus {
    pub const FLOW: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ];

    /// The following state, or `None` once picked up.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Step number for progress display, 1 to 4.
    pub fn progress(self) -> u8 {
        match self {
            OrderStatus::Received => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Ready => 3,
            OrderStatus::PickedUp => 4,
        }
    }

    /// Message shown to the customer on entering this state.
    pub fn notification(self) -> Option<&'static str> {
        match self {
            OrderStatus::Received => None,
            OrderStatus::Preparing => Some("Your order is being prepared!"),
            OrderStatus::Ready => Some("Your order is ready for pickup!"),
            OrderStatus::PickedUp => Some("Order completed. Thank you!"),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
        };
        f.write_str(label)
    }
}

/// A confirmed order, owned by the order actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub tracking_id: TrackingId,
    pub token: Token,
    pub vendor_id: VendorId,
    /// Vendor as it was when the order was placed.
    pub vendor: Vendor,
    pub cart: Cart,
    pub notes: String,
    pub payment_method: PaymentMethod,
    pub total: u32,
    pub item_count: u32,
    pub payment_status: PaymentStatus,
    pub payment_option: PaymentOption,
    /// Empty unless paid online by UPI.
    pub upi_id: String,
    pub order_time: DateTime<Utc>,
    pub estimated_time: DateTime<Utc>,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Whole minutes until the estimated ready time, rounded up.
    ///
    /// Zero once the order is ready or picked up, or when the estimate has passed.
    pub fn estimated_minutes(&self, now: DateTime<Utc>) -> i64 {
        if matches!(self.status, OrderStatus::Ready | OrderStatus::PickedUp) {
            return 0;
        }
        let remaining_ms = (self.estimated_time - now).num_milliseconds();
        if remaining_ms <= 0 {
            return 0;
        }
        (remaining_ms + 59_999) / 60_000
    }
}

/// Payload for creating an order. Built from a submitted checkout plus the
/// payment outcome; ids, token and timestamps are filled in by the actor.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub vendor_id: VendorId,
    pub vendor: Vendor,
    pub cart: Cart,
    pub notes: String,
    pub payment_method: PaymentMethod,
    pub total: u32,
    pub item_count: u32,
    pub payment_status: PaymentStatus,
    pub payment_option: PaymentOption,
    pub upi_id: String,
}

/// One published status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flow_is_monotonic() {
        let mut seen = vec![OrderStatus::Received];
        while let Some(next) = seen.last().and_then(|s| s.next()) {
            assert!(next > *seen.last().unwrap());
            seen.push(next);
        }
        assert_eq!(seen, OrderStatus::FLOW.to_vec());
        assert!(OrderStatus::PickedUp.is_terminal());
    }

    #[test]
    fn test_progress_and_notifications() {
        let progress: Vec<u8> = OrderStatus::FLOW.iter().map(|s| s.progress()).collect();
        assert_eq!(progress, vec![1, 2, 3, 4]);
        assert_eq!(OrderStatus::Received.notification(), None);
        assert_eq!(
            OrderStatus::Ready.notification(),
            Some("Your order is ready for pickup!")
        );
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PickedUp).unwrap(),
            r#""picked_up""#
        );
        assert_eq!(OrderStatus::PickedUp.to_string(), "picked_up");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            r#""cash""#
        );
    }
}
