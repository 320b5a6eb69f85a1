//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::framework::{ActorEntity, FrameworkError, Page, PageRequest};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// # Resource-Oriented Architecture
/// The variants are the standard lifecycle operations of a resource collection:
///
/// - **Create**: assigns a fresh id and places the entity at the front.
/// - **Get**: fetches one entity by id.
/// - **Update**: merges an [`ActorEntity::Update`] onto an existing entity.
/// - **Delete**: removes an entity.
/// - **List**: filters with an [`ActorEntity::Filter`] and returns one page.
/// - **Snapshot**: the whole collection in store order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
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
    List {
        filter: T::Filter,
        page: PageRequest,
        respond_to: Response<Page<T>>,
    },
    Snapshot {
        respond_to: Response<Vec<T>>,
    },
}
