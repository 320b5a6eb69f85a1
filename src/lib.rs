//! # Storefront Catalog
//!
//! > **An in-memory product catalog behind an actor, with paged and filtered reads.**
//!
//! The catalog is a single ordered collection of products owned by one Tokio task. Every
//! read and write goes through [`CatalogClient`](clients::CatalogClient); nothing else can
//! see or touch the collection. Each request is applied in arrival order and answered after
//! a configurable simulated latency.
//!
//! ## 🏗️ Design
//!
//! ### One owner, many readers
//! The store lives inside a [`ResourceActor`](framework::ResourceActor). Callers hold cheap
//! clones of a client and exchange messages with the actor, so there are no locks and no
//! shared mutable state. A mutation is visible to the next request the actor processes,
//! even if the reply to the mutating caller is still waiting out its latency.
//!
//! ### Newest first
//! Products are kept in display order. Seeds are appended in order; anything added later
//! goes to the front. Listing filters this sequence and slices it into pages.
//!
//! ### Errors
//! The framework speaks [`FrameworkError`](framework::FrameworkError); the catalog maps it
//! to [`CatalogError`](catalog_actor::CatalogError) at the client boundary so callers match
//! on domain variants (`NotFound`, `InvalidPage`, `ValidationError`).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic actor, client, ordered store and paging. Knows nothing about products.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`Page`](framework::Page).
//!
//! ### 2. The Catalog ([`model`], [`catalog_actor`])
//! The product types, their `ActorEntity` implementation, validation and the demo seed.
//!
//! ### 3. The Interface ([`clients`])
//! [`CatalogClient`](clients::CatalogClient) is the query/mutation service.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Configuration, tracing setup, and [`Storefront`](lifecycle::Storefront) which spawns
//! and shuts down the actor.
//!
//! ### 5. Consumers ([`cart`], [`session`])
//! A shopping cart that holds product snapshots and a mock role-based session.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs and no artificial delay
//! CATALOG_LATENCY_MS=0 RUST_LOG=info cargo run
//! ```

pub mod cart;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod session;
