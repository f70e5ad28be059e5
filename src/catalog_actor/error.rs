//! Error types for the catalog actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Vendor not found: {0}")]
    NotFound(String),

    #[error("Unknown item {item} at {vendor}")]
    UnknownItem { vendor: String, item: String },

    #[error("Invalid stall: {0}")]
    InvalidStall(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
