//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource type implements to be held by an
//! [`OrderedStore`](crate::framework::OrderedStore) and served by a
//! [`ResourceActor`](crate::framework::ResourceActor). It names the associated types for ids,
//! create/update payloads, list filters and errors.
//!
//! # Architecture Note
//! The actor, the store and the client are written once against this trait. The product
//! catalog is one implementation; the framework itself knows nothing about names,
//! categories or prices.
//!
//! The associated types keep payloads apart at compile time: a `Product` store only accepts
//! `ProductDraft` for creation and `ProductPatch` for updates.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// # Id Assignment
/// Ids are never supplied by callers. The store hands out a monotonic `u32` sequence and
/// converts it with `From<u32>`, so an id is unique for the lifetime of the store.
///
/// # Filtering
/// `Filter` describes a list predicate. `Filter::default()` must match every entity.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Predicate applied by list requests.
    type Filter: Send + Sync + Debug + Default;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id assigned to this instance by the store.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the assigned id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Merge an update into the entity. The id must not change.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this entity is retained by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
