//! Pure data structures (DTOs). [`Product`] implements the
//! [`ActorEntity`](crate::framework::ActorEntity) trait in [`crate::catalog_actor`].

pub mod product;

pub use product::*;
