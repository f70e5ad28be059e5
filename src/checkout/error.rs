//! Errors raised while moving an order through checkout.

use crate::catalog_actor::CatalogError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// Vendor or menu could not be resolved.
    #[error("Missing order state: {0}")]
    MissingState(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("UPI id is required for UPI payments")]
    BlankPaymentId,

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Item is not available: {0}")]
    ItemUnavailable(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CheckoutError {
    /// Errors after which the flow cannot continue and the caller should go
    /// back to the vendor listing.
    pub fn is_redirect_home(&self) -> bool {
        matches!(self, CheckoutError::MissingState(_) | CheckoutError::EmptyCart)
    }
}
