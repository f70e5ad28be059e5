//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity failures travel inside
//! [`FrameworkError::EntityError`] and are mapped back to a domain error by
//! each client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The id generator produced an id that is already stored.
    #[error("Id already in use: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the entity error if it is of type `E`.
    ///
    /// Clients use this to recover their own typed error from the boxed one
    /// the actor sent back.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
