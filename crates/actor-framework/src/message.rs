//! # Generic Messages
//!
//! The request enum carried from [`ResourceClient`](crate::ResourceClient) to
//! [`ResourceActor`](crate::ResourceActor), with a oneshot reply channel in
//! every variant.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the CRUD lifecycle plus `List` for collection reads and
/// `Action` for resource-specific logic. Payload types come from the
/// [`ActorEntity`] associated types, so every request is checked against the
/// entity it targets.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
