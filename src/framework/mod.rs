//! Generic actor framework for ordered resource collections.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`OrderedStore`] - The ordered, id-assigning collection the actor owns
//! - [`ResourceActor`] - Task that owns the store and answers requests
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests
//! - [`Latency`] - Delay policy for replies
//! - [`Page`] / [`PageRequest`] - One-based pagination
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod latency;
pub mod message;
pub mod mock;
pub mod page;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use latency::Latency;
pub use message::{ResourceRequest, Response};
pub use page::{Page, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use store::OrderedStore;
