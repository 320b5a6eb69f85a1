use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Shared plumbing for resource clients that wrap a [`ResourceClient`].
///
/// Implementors supply the inner client and two error mappings; in return they get
/// single-entity lookups and deletes that already speak the resource's own error type.
/// A missing entity surfaces as `not_found(id)` rather than an empty `Option`, so callers
/// match on one error variant whether the id vanished before a read or before a delete.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Maps transport and store failures into the resource's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The error for an id that is not live.
    fn not_found(id: &T::Id) -> Self::Error;

    /// Fetches an entity, treating an absent id as `not_found`.
    #[tracing::instrument(skip(self))]
    async fn get_or_not_found(&self, id: T::Id) -> Result<T, Self::Error> {
        match self.inner().get(id.clone()).await.map_err(Self::map_error)? {
            Some(entity) => Ok(entity),
            None => {
                tracing::debug!("No such entity");
                Err(Self::not_found(&id))
            }
        }
    }

    /// Removes an entity. The store already reports a missing id as `NotFound`, which
    /// `map_error` translates.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), Self::Error> {
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
