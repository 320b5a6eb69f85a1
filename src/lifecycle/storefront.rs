use thiserror::Error;
use tracing::{error, info};

use crate::catalog_actor::{self, CatalogError};
use crate::clients::CatalogClient;
use crate::lifecycle::CatalogConfig;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("catalog failed to start: {0}")]
    Startup(#[from] CatalogError),
    #[error("actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the storefront catalog.
///
/// `Storefront` owns the catalog actor's task and exposes the [`CatalogClient`] every
/// consumer (listing views, admin forms, the cart) goes through.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::start(&CatalogConfig::default())?;
///
/// let page = storefront.catalog.list_products(ProductQuery::new()).await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the catalog actor
    pub catalog: CatalogClient,

    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Builds the catalog actor from `config` and spawns it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &CatalogConfig) -> Result<Self, LifecycleError> {
        let (actor, catalog) = catalog_actor::new(config)?;
        let handle = tokio::spawn(actor.run());
        info!(
            latency_ms = config.latency_ms,
            seeded = config.seed_demo_catalog,
            "Storefront started"
        );
        Ok(Self { catalog, handle })
    }

    /// Gracefully shuts down the catalog.
    ///
    /// Drops this client and waits for the actor to exit. Clones of the client held
    /// elsewhere keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down storefront...");
        drop(self.catalog);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
