//! # Catalog Actor
//!
//! The product catalog built on the generic framework: a [`ResourceActor<Product>`]
//! owning the ordered catalog, plus the [`CatalogClient`] that fronts it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`CatalogError`]
//! - [`validation`] - form checks for drafts and patches
//! - [`seed`] - the demo catalog
//! - [`new()`] - factory that builds the actor and its client from configuration
//!
//! ## Usage
//!
//! ```rust
//! use storefront_catalog::catalog_actor;
//! use storefront_catalog::clients::ProductQuery;
//! use storefront_catalog::lifecycle::CatalogConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig { latency_ms: 0, ..CatalogConfig::default() };
//!     let (actor, client) = catalog_actor::new(&config)?;
//!     tokio::spawn(actor.run());
//!
//!     let page = client.list_products(ProductQuery::new().category("sports")).await?;
//!     assert_eq!(page.items.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod seed;
pub mod validation;

pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::{Latency, ResourceActor};
use crate::lifecycle::CatalogConfig;
use crate::model::Product;

/// Creates the catalog actor and its client, seeding the demo catalog if configured.
pub fn new(config: &CatalogConfig) -> Result<(ResourceActor<Product>, CatalogClient), CatalogError> {
    let latency = Latency::from_millis(config.latency_ms);
    let (mut actor, generic_client) = ResourceActor::new(config.channel_buffer, latency);
    if config.seed_demo_catalog {
        actor.seed(seed::demo_catalog())?;
    }
    let client = CatalogClient::new(generic_client, config.default_page_size);
    Ok((actor, client))
}
