//! Error types for the order actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The vendor on the order is not in the catalog.
    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),

    #[error("Catalog unavailable: {0}")]
    Catalog(String),

    #[error("Payment failed: {0}")]
    Payment(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Errors after which the caller should go back to the vendor listing.
    pub fn is_redirect_home(&self) -> bool {
        matches!(self, OrderError::UnknownVendor(_))
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
