//! Runtime orchestration and lifecycle management.
//!
//! - [`Storefront`] - starts the catalog actor, hands out its client, shuts it down
//! - [`CatalogConfig`] - runtime settings (latency, paging, seeding, log level)
//! - [`setup_tracing`] - structured logging
//!
//! # Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final size and exits**
//! 4. **Await completion** - the task handle is joined
//!
//! Replies still in flight under a latency policy are delivered by their own tasks and are
//! not awaited.

pub mod config;
pub mod storefront;
pub mod tracing;

pub use self::config::*;
pub use self::storefront::*;
pub use self::tracing::setup_tracing;
