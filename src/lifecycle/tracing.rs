//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole catalog runtime.
//!
//! The format is compact and hides module paths (`with_target(false)`); the actor tags its
//! lines with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup (with store size and latency policy) and shutdown
//! - **Requests**: Create, Get, Update, Delete, List and Snapshot at `debug`
//! - **Mutations**: Created / Updated / Deleted at `info`, with the product id
//! - **Failures**: not-found and rejected requests at `warn`
//! - **Client spans**: every `CatalogClient` method runs inside an `#[instrument]` span
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show request payloads and listing totals
//! RUST_LOG=debug cargo run
//!
//! # Only the framework internals
//! RUST_LOG=storefront_catalog::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a listing shows up as:
//!
//! ```text
//! DEBUG list_products: List entity_type="Product" filter=ProductFilter { name: "", category: "sports" } current_page=1 total_pages=1 returned=2
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback_level` (e.g. `"info"`) is used. Calling this
/// twice is harmless: the second install is ignored.
pub fn setup_tracing(fallback_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
