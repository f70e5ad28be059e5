//! # ActorClient Trait
//!
//! Shared surface for resource-specific clients: `get`, `list` and `delete`
//! come for free once a wrapper exposes its inner `ResourceClient` and says how
//! to turn a [`FrameworkError`] into its own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard reads and delete.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Kiosk { id: String, open: bool }
/// #[derive(Debug)] struct KioskCreate;
/// #[derive(Debug)] struct KioskUpdate;
/// #[derive(Debug)] enum KioskAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct KioskError(String);
///
/// impl From<String> for KioskError {
///     fn from(s: String) -> Self { KioskError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Kiosk {
///     type Id = String;
///     type Create = KioskCreate;
///     type Update = KioskUpdate;
///     type Action = KioskAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = KioskError;
///
///     fn from_create_params(id: String, _: KioskCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, open: true })
///     }
///     async fn on_update(&mut self, _: KioskUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: KioskAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct KioskClient {
///     inner: ResourceClient<Kiosk>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Kiosk> for KioskClient {
///     type Error = KioskError;
///
///     fn inner(&self) -> &ResourceClient<Kiosk> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         KioskError(e.to_string())
///     }
/// }
///
/// async fn open_kiosks(client: &KioskClient) -> Result<usize, KioskError> {
///     let all = client.list().await?;
///     Ok(all.iter().filter(|k| k.open).count())
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity the actor holds.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
