//! # Payment
//!
//! [`PaymentGateway`] is the seam a real processor would plug into. The only
//! implementation is [`SimulatedGateway`]: it waits a fixed delay and then
//! approves every request. Online orders come back `completed`; cash orders
//! come back `pending` since they are paid at the counter.

use crate::checkout::PaymentRequest;
use crate::model::{PaymentMethod, PaymentStatus};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default wait before the simulated gateway answers.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_secs(2);

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Settles a submitted order and reports the resulting payment status.
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentStatus, OrderError>;
}

#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    #[instrument(skip_all, fields(method = ?request.method(), total = request.total()))]
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentStatus, OrderError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Processing payment");
        tokio::time::sleep(self.delay).await;

        let status = match request.method() {
            PaymentMethod::Online => PaymentStatus::Completed,
            PaymentMethod::Cash => PaymentStatus::Pending,
        };
        info!(?status, "Payment settled");
        Ok(status)
    }
}
