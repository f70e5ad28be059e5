//! # Order Tracking
//!
//! [`StatusTracker`] walks a placed order through
//! received → preparing → ready → picked_up. Each step waits a random delay
//! drawn from a [`DelayPolicy`], then publishes a [`StatusUpdate`]. One task
//! per tracker runs the steps in sequence, so there is never more than one
//! pending transition.
//!
//! Updates go out two ways. [`StatusTracker::changed`] yields every
//! transition in order, however late the caller polls, so each
//! [`OrderStatus::notification`] can be shown once. [`StatusTracker::subscribe`]
//! hands out `watch` receivers that only hold the latest state.
//!
//! Status is not written back to the order actor. Starting a new tracker for
//! the same order begins again from the snapshot it is given.
//!
//! ```
//! use canteen_orders::model::{OrderId, OrderStatus};
//! use canteen_orders::tracking::{DelayPolicy, StatusTracker};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let policy = DelayPolicy::new(Duration::from_millis(1), Duration::from_millis(2));
//! let mut tracker = StatusTracker::start(OrderId("ORD1".into()), OrderStatus::Received, policy);
//!
//! while let Some(update) = tracker.changed().await {
//!     if update.status.is_terminal() {
//!         break;
//!     }
//! }
//! assert_eq!(tracker.current().status, OrderStatus::PickedUp);
//! # }
//! ```

use crate::model::{OrderId, OrderStatus, StatusUpdate};
use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

/// Default lower bound for a status step.
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_secs(60);
/// Default upper bound (exclusive) for a status step.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(90);

/// Uniform delay range `[min, max)` between two status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    pub min: Duration,
    pub max: Duration,
}

impl DelayPolicy {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Draws one delay. An empty range yields `min`.
    pub fn sample(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..self.max)
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY, DEFAULT_MAX_DELAY)
    }
}

/// Handle to a running status simulation.
///
/// Dropping the handle aborts the background task.
pub struct StatusTracker {
    receiver: watch::Receiver<StatusUpdate>,
    transitions: broadcast::Receiver<StatusUpdate>,
    handle: JoinHandle<()>,
}

impl StatusTracker {
    /// Spawns the simulation for `order_id`, starting from `initial`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(order_id: OrderId, initial: OrderStatus, policy: DelayPolicy) -> Self {
        let (sender, receiver) = watch::channel(StatusUpdate {
            order_id: order_id.clone(),
            status: initial,
            updated_at: Utc::now(),
        });

        // Room for every transition, so the tracker's own receiver never lags
        let (events, transitions) = broadcast::channel(OrderStatus::FLOW.len());

        let span = info_span!("status_tracker", order_id = %order_id);
        let handle = tokio::spawn(
            async move {
                let mut status = initial;
                while let Some(next) = status.next() {
                    let delay = policy.sample();
                    debug!(from = %status, to = %next, delay_ms = delay.as_millis() as u64, "Scheduled transition");

                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = sender.closed() => {
                            debug!("No subscribers left, stopping");
                            return;
                        }
                    }

                    status = next;
                    let update = StatusUpdate {
                        order_id: order_id.clone(),
                        status,
                        updated_at: Utc::now(),
                    };
                    let _ = events.send(update.clone());
                    sender.send_replace(update);
                    info!(%status, "Status advanced");
                }
                debug!("Tracking finished");
            }
            .instrument(span),
        );

        Self {
            receiver,
            transitions,
            handle,
        }
    }

    /// Latest published update.
    pub fn current(&self) -> StatusUpdate {
        self.receiver.borrow().clone()
    }

    /// A new receiver for rendering elsewhere. The task keeps running while
    /// any receiver is alive.
    ///
    /// A `watch` receiver keeps only the latest update: a reader that falls
    /// behind sees the newest state and skips the ones in between. Use
    /// [`changed`](Self::changed) when every transition matters.
    pub fn subscribe(&self) -> watch::Receiver<StatusUpdate> {
        self.receiver.clone()
    }

    /// Waits for the next transition, in order, without skipping any.
    /// `None` once the simulation has ended and every transition was returned.
    pub async fn changed(&mut self) -> Option<StatusUpdate> {
        loop {
            match self.transitions.recv().await {
                Ok(update) => return Some(update),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Status transitions dropped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Cancels the pending transition, if any.
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for StatusTracker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
