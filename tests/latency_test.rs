use std::time::Duration;

use storefront_catalog::catalog_actor::CatalogError;
use storefront_catalog::lifecycle::{CatalogConfig, Storefront};
use storefront_catalog::model::{ProductId, ProductPatch};
use tokio::time::Instant;

fn delayed_config() -> CatalogConfig {
    CatalogConfig {
        latency_ms: 500,
        ..CatalogConfig::default()
    }
}

/// Replies are delayed, but a later request already sees an earlier mutation.
#[tokio::test(start_paused = true)]
async fn test_later_request_observes_pending_mutation() {
    let storefront = Storefront::start(&delayed_config()).expect("Failed to start storefront");
    let catalog = &storefront.catalog;
    let started = Instant::now();

    // join! polls in order, so the update is enqueued before the read
    let (updated, fetched) = tokio::join!(
        catalog.update_product(ProductId(3), ProductPatch::price(8999)),
        catalog.get_product(ProductId(3)),
    );

    assert_eq!(updated.expect("Failed to update").price, 8999);
    assert_eq!(fetched.expect("Failed to get").price, 8999);

    // Both replies waited out the same delay concurrently
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1000));
}

/// A caller that stops waiting does not undo its mutation.
#[tokio::test(start_paused = true)]
async fn test_abandoned_mutation_still_applies() {
    let storefront = Storefront::start(&delayed_config()).expect("Failed to start storefront");
    let catalog = &storefront.catalog;

    let abandoned = tokio::time::timeout(
        Duration::from_millis(100),
        catalog.delete_product(ProductId(1)),
    )
    .await;
    assert!(abandoned.is_err(), "delete should still be waiting for its reply");

    assert_eq!(
        catalog.get_product(ProductId(1)).await,
        Err(CatalogError::NotFound("1".into()))
    );
}

#[tokio::test(start_paused = true)]
async fn test_zero_latency_replies_without_delay() {
    let config = CatalogConfig {
        latency_ms: 0,
        ..CatalogConfig::default()
    };
    let storefront = Storefront::start(&config).expect("Failed to start storefront");
    let started = Instant::now();

    storefront
        .catalog
        .get_product(ProductId(1))
        .await
        .expect("Failed to get product");

    assert_eq!(started.elapsed(), Duration::ZERO);
}
